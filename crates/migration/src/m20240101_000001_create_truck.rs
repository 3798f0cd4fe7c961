//! Create `truck` table.
//!
//! One row per fleet truck and its assigned driver. The id is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Truck::Table)
                    .if_not_exists()
                    .col(big_integer(Truck::Id).auto_increment().primary_key())
                    .col(string_len(Truck::TruckNumber, 64).not_null())
                    .col(string_len(Truck::DriverName, 128).not_null())
                    .col(ColumnDef::new(Truck::DriverContact).string_len(64).null())
                    .col(ColumnDef::new(Truck::TruckType).string_len(64).null())
                    .col(ColumnDef::new(Truck::Capacity).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Truck::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Truck { Table, Id, TruckNumber, DriverName, DriverContact, TruckType, Capacity }
