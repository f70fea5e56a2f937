use crate::utils::webutils::{validate_admin_token, validate_token};
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod admin;
pub mod auth;
pub mod configs;
pub mod devices;
pub mod health;
pub mod monitoring;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::bearer(validate_token);
    let admin_auth = HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/auth")
            .service(web::scope("/login").service(auth::login::login))
            .service(
                web::scope("/register")
                    .service(auth::register::register)
                    .wrap(admin_auth.clone()),
            )
            .service(
                web::scope("/me")
                    .service(auth::me::me)
                    .wrap(user_auth.clone()),
            ),
    );

    cfg.service(
        web::scope("/devices")
            .service(devices::create::create)
            .service(devices::list::list)
            .service(devices::get::get)
            .service(devices::update::update)
            .service(devices::delete::delete)
            .wrap(user_auth.clone()),
    );

    cfg.service(
        web::scope("/configs")
            .service(configs::upsert::upsert)
            .service(configs::list::list)
            .wrap(user_auth.clone()),
    );

    cfg.service(
        web::scope("/monitoring")
            .service(monitoring::submit::submit)
            .service(monitoring::list::list)
            .wrap(user_auth),
    );

    cfg.service(
        web::scope("/admin")
            .service(admin::stats::stats)
            .service(admin::seed::seed_admin)
            .wrap(admin_auth),
    );
}
