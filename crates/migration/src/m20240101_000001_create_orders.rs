//! Create `orders` table.
//!
//! Single resource table; `id` and `created_at` are store-assigned.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(integer(Orders::Id).primary_key().auto_increment())
                    .col(string_len(Orders::ItemName, 255).not_null())
                    .col(integer(Orders::Quantity).not_null())
                    .col(double(Orders::Price).not_null())
                    .col(
                        timestamp_with_time_zone(Orders::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders { Table, Id, ItemName, Quantity, Price, CreatedAt }
