use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RTelemetrySubmit {
    pub metric: String,
    pub value: String,
}

#[derive(Deserialize)]
pub struct TelemetryQuery {
    pub metric: Option<String>,
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct TelemetryRes {
    pub id: Uuid,
    pub device_id: Uuid,
    pub metric: String,
    pub value: String,
    pub recorded_at: DateTime<Utc>,
}

impl From<entity::telemetry::Model> for TelemetryRes {
    fn from(t: entity::telemetry::Model) -> Self {
        TelemetryRes {
            id: t.id,
            device_id: t.device_id,
            metric: t.metric,
            value: t.value,
            recorded_at: t.recorded_at,
        }
    }
}
