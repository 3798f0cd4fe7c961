use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Business key: one live row per truck number
        manager
            .create_index(
                Index::create()
                    .name("idx_truck_truck_number")
                    .table(Truck::Table)
                    .col(Truck::TruckNumber)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_truck_truck_number").table(Truck::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Truck { Table, TruckNumber }
