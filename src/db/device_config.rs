use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::device_config::{
    ActiveModel as ConfigActive, Entity as DeviceConfig, Model as ConfigModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    /// One row per (device, key): update the value in place when the key is
    /// already present, insert otherwise.
    pub async fn upsert_device_config(
        &self,
        device_id: &Uuid,
        key: String,
        value: String,
    ) -> Result<ConfigModel, AppError> {
        self.get_device(device_id).await?;

        let existing = DeviceConfig::find()
            .filter(entity::device_config::Column::DeviceId.eq(*device_id))
            .filter(entity::device_config::Column::Key.eq(key.as_str()))
            .one(&self.db)
            .await?;

        match existing {
            Some(row) => {
                let mut am: ConfigActive = row.into();
                am.value = Set(value);
                am.updated_at = Set(Utc::now());
                Ok(am.update(&self.db).await?)
            }
            None => Ok(ConfigActive {
                id: Set(Uuid::new_v4()),
                device_id: Set(*device_id),
                key: Set(key),
                value: Set(value),
                updated_at: Set(Utc::now()),
            }
            .insert(&self.db)
            .await?),
        }
    }

    pub async fn list_device_configs(
        &self,
        device_id: &Uuid,
    ) -> Result<Vec<ConfigModel>, AppError> {
        self.get_device(device_id).await?;

        Ok(DeviceConfig::find()
            .filter(entity::device_config::Column::DeviceId.eq(*device_id))
            .order_by_asc(entity::device_config::Column::Key)
            .all(&self.db)
            .await?)
    }
}
