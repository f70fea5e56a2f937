use std::sync::Arc;

use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::Model as UserModel;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::TokenService;

/// Token -> live user. One read against the store per call; every request
/// re-resolves from the source of truth, nothing is cached.
pub async fn resolve_user(
    db: &PostgresService,
    tokens: &TokenService,
    token: &str,
) -> Result<UserModel, AppError> {
    let subject = tokens.verify(token)?;
    let user = db
        .get_user_by_email(&subject)
        .await
        .map_err(|_| AppError::Unauthorized)?;
    if !user.is_active {
        return Err(AppError::Unauthorized);
    }
    Ok(user)
}

pub fn require_admin(user: UserModel) -> Result<UserModel, AppError> {
    if !user.is_admin {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

fn state(req: &ServiceRequest) -> Result<(Arc<PostgresService>, TokenService), AppError> {
    let db = req
        .app_data::<web::Data<Arc<PostgresService>>>()
        .ok_or_else(|| AppError::Internal("PostgresService missing from app data".into()))?;
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::Internal("TokenService missing from app data".into()))?;
    Ok((Arc::clone(db.get_ref()), tokens.get_ref().clone()))
}

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let (db, tokens) = match state(&req) {
        Ok(s) => s,
        Err(e) => return Err((e.into(), req)),
    };
    match resolve_user(&db, &tokens, credentials.token()).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

pub async fn validate_admin_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let (db, tokens) = match state(&req) {
        Ok(s) => s,
        Err(e) => return Err((e.into(), req)),
    };
    let resolved = resolve_user(&db, &tokens, credentials.token()).await;
    match resolved.and_then(require_admin) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}
