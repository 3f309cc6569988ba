use crate::utils::{cascade, id_column};
use entity::{
    courses,
    reviews::{self, constraints::*},
    students,
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
                    .table(reviews::Entity)
                    .if_not_exists()
                    .col(&mut id_column(reviews::Column::Id))
                    .col(ColumnDef::new(reviews::Column::CourseId).integer().not_null())
                    .col(
                        ColumnDef::new(reviews::Column::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(reviews::Column::Rating).integer().not_null())
                    .col(ColumnDef::new(reviews::Column::Comment).text().not_null())
                    .col(
                        ColumnDef::new(reviews::Column::DateAdded)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut cascade(
                        FK_REVIEWS_COURSE_ID,
                        (reviews::Entity, reviews::Column::CourseId),
                        (courses::Entity, courses::Column::Id),
                    ))
                    .foreign_key(&mut cascade(
                        FK_REVIEWS_STUDENT_ID,
                        (reviews::Entity, reviews::Column::StudentId),
                        (students::Entity, students::Column::Id),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UC_REVIEWS_STUDENT_ID_COURSE_ID)
                    .table(reviews::Entity)
                    .col(reviews::Column::StudentId)
                    .col(reviews::Column::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(reviews::Entity).to_owned())
            .await
    }
}
