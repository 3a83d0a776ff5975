use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create equipment table
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Equipment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Equipment::Name).string().not_null())
                    .col(ColumnDef::new(Equipment::Type).string().not_null())
                    .col(
                        ColumnDef::new(Equipment::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Equipment::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create reservations table
        // Dates and times are kept as ISO text (YYYY-MM-DD / HH:MM)
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::ResourceId).string().not_null())
                    .col(
                        ColumnDef::new(Reservations::ResourceName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::Type).string().not_null())
                    .col(ColumnDef::new(Reservations::Date).string_len(10).not_null())
                    .col(
                        ColumnDef::new(Reservations::StartTime)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::EndTime).string_len(8).not_null())
                    .col(ColumnDef::new(Reservations::Requester).string().not_null())
                    .col(ColumnDef::new(Reservations::Observation).string())
                    .col(ColumnDef::new(Reservations::ScaffoldingType).string())
                    .col(
                        ColumnDef::new(Reservations::CostSaved)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservations_date_resource")
                    .table(Reservations::Table)
                    .col(Reservations::Date)
                    .col(Reservations::ResourceId)
                    .to_owned(),
            )
            .await?;

        // Create maintenance_orders table
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MaintenanceOrders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MaintenanceOrders::Type).string().not_null())
                    .col(
                        ColumnDef::new(MaintenanceOrders::ItemName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceOrders::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(MaintenanceOrders::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(MaintenanceOrders::CostSaved)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(MaintenanceOrders::Technician).string())
                    .col(
                        ColumnDef::new(MaintenanceOrders::EntryDate)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(MaintenanceOrders::CompletionDate).string_len(10))
                    .col(
                        ColumnDef::new(MaintenanceOrders::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create safety_records table
        manager
            .create_table(
                Table::create()
                    .table(SafetyRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SafetyRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SafetyRecords::NrType).string().not_null())
                    .col(ColumnDef::new(SafetyRecords::AssetName).string().not_null())
                    .col(
                        ColumnDef::new(SafetyRecords::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SafetyRecords::LastInspection)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SafetyRecords::NextInspection)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SafetyRecords::Status)
                            .string()
                            .not_null()
                            .default("compliant"),
                    )
                    .col(
                        ColumnDef::new(SafetyRecords::Responsible)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SafetyRecords::DocumentUrl).string())
                    .col(
                        ColumnDef::new(SafetyRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SafetyRecords::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenanceOrders::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Equipment {
    Table,
    Id,
    Name,
    Type,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Reservations {
    Table,
    Id,
    ResourceId,
    ResourceName,
    Type,
    Date,
    StartTime,
    EndTime,
    Requester,
    Observation,
    ScaffoldingType,
    CostSaved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MaintenanceOrders {
    Table,
    Id,
    Type,
    ItemName,
    Description,
    Status,
    CostSaved,
    Technician,
    EntryDate,
    CompletionDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SafetyRecords {
    Table,
    Id,
    NrType,
    AssetName,
    Description,
    LastInspection,
    NextInspection,
    Status,
    Responsible,
    DocumentUrl,
    CreatedAt,
}
