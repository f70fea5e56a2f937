use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::device::{DeviceListQuery, DeviceRes};
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<DeviceListQuery>,
) -> ApiResult<Vec<DeviceRes>> {
    let devices = db.list_devices(query.status.as_deref()).await?;

    Ok(ApiResponse::Ok(
        devices.into_iter().map(Into::into).collect(),
    ))
}
