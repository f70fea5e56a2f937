use actix_web::{post, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::telemetry::{RTelemetrySubmit, TelemetryRes};

#[post("/devices/{device_id}/telemetry")]
async fn submit(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RTelemetrySubmit>,
) -> ApiResult<TelemetryRes> {
    let body = body.into_inner();

    let point = db
        .record_telemetry(&path.into_inner(), body.metric, body.value)
        .await?;

    Ok(ApiResponse::Created(point.into()))
}
