use crate::utils::{cascade, id_column};
use entity::{
    courses, students,
    transactions::{self, constraints::*},
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
                    .table(transactions::Entity)
                    .if_not_exists()
                    .col(&mut id_column(transactions::Column::Id))
                    .col(
                        ColumnDef::new(transactions::Column::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(transactions::Column::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(transactions::Column::TransactionDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(transactions::Column::AmountPaid)
                            .decimal_len(8, 2)
                            .not_null(),
                    )
                    .foreign_key(&mut cascade(
                        FK_TRANSACTIONS_STUDENT_ID,
                        (transactions::Entity, transactions::Column::StudentId),
                        (students::Entity, students::Column::Id),
                    ))
                    .foreign_key(&mut cascade(
                        FK_TRANSACTIONS_COURSE_ID,
                        (transactions::Entity, transactions::Column::CourseId),
                        (courses::Entity, courses::Column::Id),
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(transactions::Entity).to_owned())
            .await
    }
}
