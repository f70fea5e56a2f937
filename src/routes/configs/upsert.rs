use actix_web::{post, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::device_config::{ConfigRes, RConfigUpsert};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/devices/{device_id}")]
async fn upsert(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RConfigUpsert>,
) -> ApiResult<ConfigRes> {
    let body = body.into_inner();

    let config = db
        .upsert_device_config(&path.into_inner(), body.key, body.value)
        .await?;

    Ok(ApiResponse::Ok(config.into()))
}
