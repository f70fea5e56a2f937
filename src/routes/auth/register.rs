use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserRes};
use crate::utils::password;

#[post("")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let body = body.into_inner();

    let password_hash = password::hash(&body.password)?;

    let user = db
        .create_user(DBUserCreate {
            email: body.email,
            password_hash,
            is_admin: body.is_admin,
        })
        .await?;

    Ok(ApiResponse::Created(user.into()))
}
