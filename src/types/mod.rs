pub mod admin;
pub mod device;
pub mod device_config;
pub mod error;
pub mod response;
pub mod telemetry;
pub mod user;
