use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::telemetry::{TelemetryQuery, TelemetryRes};

const DEFAULT_LIMIT: u64 = 100;
const MAX_LIMIT: u64 = 1000;

#[get("/devices/{device_id}/telemetry")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    query: web::Query<TelemetryQuery>,
) -> ApiResult<Vec<TelemetryRes>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    let points = db
        .list_telemetry(&path.into_inner(), query.metric.as_deref(), limit)
        .await?;

    Ok(ApiResponse::Ok(points.into_iter().map(Into::into).collect()))
}
