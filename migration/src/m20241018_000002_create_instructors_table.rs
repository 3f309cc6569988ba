use crate::utils::id_column;
use entity::instructors::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(instructors::Entity)
                    .if_not_exists()
                    .col(&mut id_column(instructors::Column::Id))
                    .col(
                        ColumnDef::new(instructors::Column::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(instructors::Column::Bio).text().not_null())
                    .col(
                        ColumnDef::new(instructors::Column::Email)
                            .string_len(254)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(instructors::Column::ProfileImage)
                            .string_len(255)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UC_INSTRUCTORS_EMAIL)
                    .table(instructors::Entity)
                    .col(instructors::Column::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(instructors::Entity).to_owned())
            .await
    }
}
