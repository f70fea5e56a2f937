use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct StatsRes {
    pub users: u64,
    pub devices: u64,
    pub telemetry: u64,
}

#[derive(Serialize, Deserialize)]
pub struct SeedAdminRes {
    pub created: bool,
    pub message: String,
}
