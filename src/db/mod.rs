pub mod device;
pub mod device_config;
pub mod postgres_service;
pub mod telemetry;
pub mod user;
