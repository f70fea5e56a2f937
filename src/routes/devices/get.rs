use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::device::DeviceRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{device_id}")]
async fn get(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<DeviceRes> {
    let device = db.get_device(&path.into_inner()).await?;

    Ok(ApiResponse::Ok(device.into()))
}
