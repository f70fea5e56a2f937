use actix_web::{delete, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[delete("/{device_id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    db.delete_device(&path.into_inner()).await?;

    Ok(ApiResponse::NoContent)
}
