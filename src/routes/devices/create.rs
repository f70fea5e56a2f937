use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::device::{DBDeviceCreate, DeviceRes, RDeviceCreate};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RDeviceCreate>,
) -> ApiResult<DeviceRes> {
    let body = body.into_inner();

    let device = db
        .create_device(DBDeviceCreate {
            serial_number: body.serial_number,
            model: body.model,
            firmware_version: body.firmware_version,
            owner_id: body.owner_id,
        })
        .await?;

    Ok(ApiResponse::Created(device.into()))
}
