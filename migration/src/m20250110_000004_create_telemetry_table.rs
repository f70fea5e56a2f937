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
                    .table(Telemetry::Table)
                    .col(
                        ColumnDef::new(Telemetry::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Telemetry::DeviceId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Telemetry::Metric)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Telemetry::Value)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Telemetry::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_telemetry_device")
                            .from(Telemetry::Table, Telemetry::DeviceId)
                            .to(Devices::Table, Devices::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_telemetry_device_metric")
                    .table(Telemetry::Table)
                    .col(Telemetry::DeviceId)
                    .col(Telemetry::Metric)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Telemetry::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Telemetry {
    Table,
    Id,
    DeviceId,
    Metric,
    Value,
    RecordedAt,
}
