use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

use rdkb_fleet::config::EnvConfig;
use rdkb_fleet::db::postgres_service::PostgresService;
use rdkb_fleet::utils::token::TokenService;

pub mod client;

pub const TEST_SECRET: &str = "test_secret_key";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub tokens: TokenService,
    pub config: EnvConfig,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        let config = get_test_config(&db_url);
        let tokens = TokenService::new(TEST_SECRET, config.token_ttl_minutes);

        TestContext {
            db,
            tokens,
            config,
            _container: container,
        }
    }
}

pub fn get_test_config(db_url: &str) -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: db_url.to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl_minutes: 60,
        admin_email: Some("seed-admin@test.com".to_string()),
        admin_password: Some("seedpw123".to_string()),
    }
}

// Test data helpers
pub mod test_data {
    use rdkb_fleet::types::device::RDeviceCreate;
    use rdkb_fleet::types::user::RUserCreate;
    use uuid::Uuid;

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            email: "test@example.com".to_string(),
            password: "pw123".to_string(),
            is_admin: false,
        }
    }

    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            email: email.to_string(),
            password: "pw123".to_string(),
            is_admin: false,
        }
    }

    pub fn sample_device() -> RDeviceCreate {
        RDeviceCreate {
            serial_number: format!("SN-{}", Uuid::new_v4()),
            model: "FWA-1000".to_string(),
            firmware_version: Some("1.0.3".to_string()),
            owner_id: None,
        }
    }

    pub fn sample_device_with_serial(serial: &str) -> RDeviceCreate {
        RDeviceCreate {
            serial_number: serial.to_string(),
            model: "FWA-1000".to_string(),
            firmware_version: None,
            owner_id: None,
        }
    }
}
