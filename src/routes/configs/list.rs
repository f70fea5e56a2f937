use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::device_config::ConfigRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/devices/{device_id}")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<ConfigRes>> {
    let configs = db.list_device_configs(&path.into_inner()).await?;

    Ok(ApiResponse::Ok(
        configs.into_iter().map(Into::into).collect(),
    ))
}
