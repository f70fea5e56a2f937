use sea_orm_migration::prelude::*;

use crate::m20250110_000002_create_device_table::Devices;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeviceConfigs::Table)
                    .col(
                        ColumnDef::new(DeviceConfigs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(DeviceConfigs::DeviceId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(DeviceConfigs::Key)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(DeviceConfigs::Value)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(DeviceConfigs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_device_configs_device")
                            .from(DeviceConfigs::Table, DeviceConfigs::DeviceId)
                            .to(Devices::Table, Devices::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned()
            )
            .await?;

        // upsert target: one row per (device, key)
        manager
            .create_index(
                Index::create()
                    .name("uq_device_config_key")
                    .table(DeviceConfigs::Table)
                    .col(DeviceConfigs::DeviceId)
                    .col(DeviceConfigs::Key)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(DeviceConfigs::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum DeviceConfigs {
    Table,
    Id,
    DeviceId,
    Key,
    Value,
    UpdatedAt,
}
