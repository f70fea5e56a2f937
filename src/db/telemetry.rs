use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::telemetry::{ActiveModel as TelemetryActive, Entity as Telemetry, Model as TelemetryModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn record_telemetry(
        &self,
        device_id: &Uuid,
        metric: String,
        value: String,
    ) -> Result<TelemetryModel, AppError> {
        self.get_device(device_id).await?;

        Ok(TelemetryActive {
            id: Set(Uuid::new_v4()),
            device_id: Set(*device_id),
            metric: Set(metric),
            value: Set(value),
            recorded_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?)
    }

    /// Newest first, optionally narrowed to one metric.
    pub async fn list_telemetry(
        &self,
        device_id: &Uuid,
        metric: Option<&str>,
        limit: u64,
    ) -> Result<Vec<TelemetryModel>, AppError> {
        self.get_device(device_id).await?;

        let mut finder = Telemetry::find()
            .filter(entity::telemetry::Column::DeviceId.eq(*device_id));
        if let Some(metric) = metric {
            finder = finder.filter(entity::telemetry::Column::Metric.eq(metric));
        }
        Ok(finder
            .order_by_desc(entity::telemetry::Column::RecordedAt)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    pub async fn count_telemetry(&self) -> Result<u64, AppError> {
        Ok(Telemetry::find().count(&self.db).await?)
    }
}
