use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_members::Members;

#[derive(DeriveIden)]
enum DrivingRecords {
    Table,
    Id,
    MemberId,
    StartTime,
    EndTime,
    LocationStart,
    LocationEnd,
    FatigueLevel,
    FatigueDetected,
    CreatedAt,
}

/// Telemetry samples, one row per (driving_record_id, timestamp)
#[derive(DeriveIden)]
enum DrivingDataLogs {
    Table,
    DrivingRecordId,
    Timestamp,
    BlinkRate,
    YawnRate,
    EyeClosureDuration,
    FatigueIndex,
    FatigueDetected,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DrivingRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DrivingRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DrivingRecords::MemberId).integer().not_null())
                    .col(
                        ColumnDef::new(DrivingRecords::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DrivingRecords::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DrivingRecords::LocationStart).string().not_null())
                    .col(ColumnDef::new(DrivingRecords::LocationEnd).string().not_null())
                    // LOW / MEDIUM / HIGH
                    .col(ColumnDef::new(DrivingRecords::FatigueLevel).string_len(16).null())
                    .col(ColumnDef::new(DrivingRecords::FatigueDetected).boolean().null())
                    .col(
                        ColumnDef::new(DrivingRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driving_records_member_id")
                            .from(DrivingRecords::Table, DrivingRecords::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_driving_records_member_id")
                    .table(DrivingRecords::Table)
                    .col(DrivingRecords::MemberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DrivingDataLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DrivingDataLogs::DrivingRecordId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DrivingDataLogs::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DrivingDataLogs::BlinkRate).double().null())
                    .col(ColumnDef::new(DrivingDataLogs::YawnRate).double().null())
                    .col(ColumnDef::new(DrivingDataLogs::EyeClosureDuration).double().null())
                    .col(ColumnDef::new(DrivingDataLogs::FatigueIndex).double().null())
                    .col(
                        ColumnDef::new(DrivingDataLogs::FatigueDetected)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DrivingDataLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(DrivingDataLogs::DrivingRecordId)
                            .col(DrivingDataLogs::Timestamp),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driving_data_logs_driving_record_id")
                            .from(DrivingDataLogs::Table, DrivingDataLogs::DrivingRecordId)
                            .to(DrivingRecords::Table, DrivingRecords::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_driving_data_logs_timestamp")
                    .table(DrivingDataLogs::Table)
                    .col(DrivingDataLogs::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DrivingDataLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DrivingRecords::Table).to_owned())
            .await
    }
}
