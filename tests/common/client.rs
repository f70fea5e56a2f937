use std::sync::Arc;

use actix_web::{web, App};
use uuid::Uuid;

use rdkb_fleet::config::EnvConfig;
use rdkb_fleet::db::postgres_service::PostgresService;
use rdkb_fleet::types::device::DBDeviceCreate;
use rdkb_fleet::types::user::DBUserCreate;
use rdkb_fleet::utils::{password, token::TokenService};

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub tokens: TokenService,
    pub config: EnvConfig,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>, tokens: TokenService, config: EnvConfig) -> Self {
        TestClient { db, tokens, config }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.tokens.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .configure(rdkb_fleet::routes::configure_routes)
    }

    /// Seed an admin straight into the store and mint a bearer for it.
    pub async fn create_test_admin(&self) -> (Uuid, String) {
        let email = format!("admin-{}@test.com", Uuid::new_v4());
        let user = self
            .db
            .create_user(DBUserCreate {
                email: email.clone(),
                password_hash: password::hash("adminpw").expect("Failed to hash password"),
                is_admin: true,
            })
            .await
            .expect("Failed to create admin");

        let token = self
            .tokens
            .issue(&email, None)
            .expect("Failed to issue admin token");

        (user.id, token)
    }

    pub async fn create_test_user(&self) -> (Uuid, String) {
        let email = format!("user-{}@test.com", Uuid::new_v4());
        let user = self
            .db
            .create_user(DBUserCreate {
                email: email.clone(),
                password_hash: password::hash("pw123").expect("Failed to hash password"),
                is_admin: false,
            })
            .await
            .expect("Failed to create user");

        let token = self
            .tokens
            .issue(&email, None)
            .expect("Failed to issue user token");

        (user.id, token)
    }

    pub async fn create_test_device(&self) -> Uuid {
        let device = self
            .db
            .create_device(DBDeviceCreate {
                serial_number: format!("SN-{}", Uuid::new_v4()),
                model: "FWA-1000".to_string(),
                firmware_version: Some("1.0.3".to_string()),
                owner_id: None,
            })
            .await
            .expect("Failed to create device");

        device.id
    }
}
