use actix_web::{post, web};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::admin::SeedAdminRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::password;

/// Idempotent: writes nothing when an admin account already exists.
#[post("/seed-admin")]
async fn seed_admin(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
) -> ApiResult<SeedAdminRes> {
    let (email, admin_password) = match (&config.admin_email, &config.admin_password) {
        (Some(email), Some(pw)) => (email.clone(), pw.clone()),
        _ => {
            return Err(AppError::BadRequest(
                "admin credentials not configured".to_string(),
            ))
        }
    };

    let password_hash = password::hash(&admin_password)?;
    let created = db.seed_admin(email, password_hash).await?;

    Ok(ApiResponse::Ok(SeedAdminRes {
        created,
        message: if created {
            "Admin created".to_string()
        } else {
            "Admin already exists".to_string()
        },
    }))
}
