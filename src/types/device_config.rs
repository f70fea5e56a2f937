use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RConfigUpsert {
    pub key: String,
    pub value: String,
}

#[derive(Serialize, Deserialize)]
pub struct ConfigRes {
    pub id: Uuid,
    pub device_id: Uuid,
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::device_config::Model> for ConfigRes {
    fn from(c: entity::device_config::Model) -> Self {
        ConfigRes {
            id: c.id,
            device_id: c.device_id,
            key: c.key,
            value: c.value,
            updated_at: c.updated_at,
        }
    }
}
