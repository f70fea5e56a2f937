use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RLogin, TokenRes};
use crate::utils::password;
use crate::utils::token::TokenService;

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    tokens: web::Data<TokenService>,
    body: web::Json<RLogin>,
) -> ApiResult<TokenRes> {
    let body = body.into_inner();

    // Unknown email and wrong password must be indistinguishable on the wire.
    let user = db
        .get_user_by_email(&body.email)
        .await
        .map_err(|_| AppError::InvalidCredentials)?;

    if !password::verify(&body.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let access_token = tokens.issue(&user.email, None)?;

    Ok(ApiResponse::Ok(TokenRes {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
