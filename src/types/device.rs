use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RDeviceCreate {
    pub serial_number: String,
    pub model: String,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize)]
pub struct DBDeviceCreate {
    pub serial_number: String,
    pub model: String,
    pub firmware_version: Option<String>,
    pub owner_id: Option<Uuid>,
}

/// Partial update; absent fields are left untouched.
#[derive(Serialize, Deserialize, Default)]
pub struct RDeviceUpdate {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct DeviceListQuery {
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DeviceRes {
    pub id: Uuid,
    pub serial_number: String,
    pub model: String,
    pub firmware_version: Option<String>,
    pub status: String,
    pub last_seen: Option<DateTime<Utc>>,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::device::Model> for DeviceRes {
    fn from(d: entity::device::Model) -> Self {
        DeviceRes {
            id: d.id,
            serial_number: d.serial_number,
            model: d.model,
            firmware_version: d.firmware_version,
            status: d.status,
            last_seen: d.last_seen,
            owner_id: d.owner_id,
            created_at: d.created_at,
        }
    }
}
