use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::admin::StatsRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/stats")]
async fn stats(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<StatsRes> {
    let users = db.count_users().await?;
    let devices = db.count_devices().await?;
    let telemetry = db.count_telemetry().await?;

    Ok(ApiResponse::Ok(StatsRes {
        users,
        devices,
        telemetry,
    }))
}
