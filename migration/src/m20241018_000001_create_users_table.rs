use crate::utils::id_column;
use entity::users::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(&mut id_column(users::Column::Id))
                    .col(
                        ColumnDef::new(users::Column::Username)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(users::Column::Email).string_len(254).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UC_USERS_USERNAME)
                    .table(users::Entity)
                    .col(users::Column::Username)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await
    }
}
