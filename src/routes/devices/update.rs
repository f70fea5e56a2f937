use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::device::{DeviceRes, RDeviceUpdate};
use crate::types::response::{ApiResponse, ApiResult};

#[put("/{device_id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RDeviceUpdate>,
) -> ApiResult<DeviceRes> {
    let device = db
        .update_device(&path.into_inner(), body.into_inner())
        .await?;

    Ok(ApiResponse::Ok(device.into()))
}
