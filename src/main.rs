use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use rdkb_fleet::config::EnvConfig;
use rdkb_fleet::db::postgres_service::PostgresService;
use rdkb_fleet::routes::configure_routes;
use rdkb_fleet::utils::{password, token::TokenService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_minutes);

    // A fresh database has no admin, and registration is admin-gated; seed
    // one from the environment so the API is reachable at all.
    if let (Some(email), Some(pw)) = (config.admin_email.clone(), config.admin_password.clone()) {
        let password_hash =
            password::hash(&pw).expect("Failed to hash bootstrap admin password");
        match db.seed_admin(email.clone(), password_hash).await {
            Ok(true) => log::info!("Bootstrapped admin account {}", email),
            Ok(false) => log::debug!("Admin account already present, skipping bootstrap"),
            Err(e) => log::error!("Admin bootstrap failed: {}", e),
        }
    }

    log::info!("Starting server on {}", addr);

    let config_data = web::Data::new(config);
    let tokens_data = web::Data::new(tokens);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(config_data.clone())
            .app_data(tokens_data.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
