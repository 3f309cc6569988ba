use crate::utils::{cascade, id_column};
use entity::{
    students::{self, constraints::*},
    users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(students::Entity)
                    .if_not_exists()
                    .col(&mut id_column(students::Column::Id))
                    .col(ColumnDef::new(students::Column::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(students::Column::Username)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(students::Column::Email)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(&mut cascade(
                        FK_STUDENTS_USER_ID,
                        (students::Entity, students::Column::UserId),
                        (users::Entity, users::Column::Id),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UC_STUDENTS_USER_ID)
                    .table(students::Entity)
                    .col(students::Column::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(students::Entity).to_owned())
            .await
    }
}
