use crate::db::postgres_service::PostgresService;
use crate::types::device::{DBDeviceCreate, RDeviceUpdate};
use crate::types::error::AppError;
use chrono::Utc;
use entity::device::{ActiveModel as DeviceActive, Entity as Device, Model as DeviceModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn device_exists_by_serial(&self, serial: &str) -> Result<bool, AppError> {
        Ok(Device::find()
            .filter(entity::device::Column::SerialNumber.eq(serial))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_device(&self, id: &Uuid) -> Result<DeviceModel, AppError> {
        Ok(Device::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Device does not exist".into()))?)
    }

    /// Registration: new devices come up offline and unseen.
    pub async fn create_device(&self, payload: DBDeviceCreate) -> Result<DeviceModel, AppError> {
        if self.device_exists_by_serial(&payload.serial_number).await? {
            return Err(AppError::AlreadyExists);
        }

        Ok(DeviceActive {
            id: Set(Uuid::new_v4()),
            serial_number: Set(payload.serial_number),
            model: Set(payload.model),
            firmware_version: Set(payload.firmware_version),
            status: Set("offline".to_string()),
            last_seen: Set(None),
            owner_id: Set(payload.owner_id),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn list_devices(&self, status: Option<&str>) -> Result<Vec<DeviceModel>, AppError> {
        let mut finder = Device::find();
        if let Some(status) = status {
            finder = finder.filter(entity::device::Column::Status.eq(status));
        }
        Ok(finder
            .order_by_desc(entity::device::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn update_device(
        &self,
        id: &Uuid,
        patch: RDeviceUpdate,
    ) -> Result<DeviceModel, AppError> {
        let mut am: DeviceActive = self.get_device(id).await?.into();

        if let Some(v) = patch.model {
            am.model = Set(v);
        }
        if let Some(v) = patch.firmware_version {
            am.firmware_version = Set(Some(v));
        }
        if let Some(v) = patch.status {
            // coming online is the only transition with a side effect
            if v == "online" {
                am.last_seen = Set(Some(Utc::now()));
            }
            am.status = Set(v);
        }
        if let Some(v) = patch.owner_id {
            am.owner_id = Set(Some(v));
        }

        Ok(am.update(&self.db).await?)
    }

    /// Config entries and telemetry points go down with the device (FK cascade).
    pub async fn delete_device(&self, id: &Uuid) -> Result<(), AppError> {
        let device = self.get_device(id).await?;
        let am: DeviceActive = device.into();
        am.delete(&self.db).await?;
        Ok(())
    }

    pub async fn count_devices(&self) -> Result<u64, AppError> {
        Ok(Device::find().count(&self.db).await?)
    }
}
