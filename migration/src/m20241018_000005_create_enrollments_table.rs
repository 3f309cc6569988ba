use crate::utils::{cascade, id_column};
use entity::{
    courses,
    enrollments::{self, constraints::*},
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
                    .table(enrollments::Entity)
                    .if_not_exists()
                    .col(&mut id_column(enrollments::Column::Id))
                    .col(
                        ColumnDef::new(enrollments::Column::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(enrollments::Column::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(enrollments::Column::DateEnrolled)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(enrollments::Column::IsPurchased)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(enrollments::Column::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(&mut cascade(
                        FK_ENROLLMENTS_STUDENT_ID,
                        (enrollments::Entity, enrollments::Column::StudentId),
                        (students::Entity, students::Column::Id),
                    ))
                    .foreign_key(&mut cascade(
                        FK_ENROLLMENTS_COURSE_ID,
                        (enrollments::Entity, enrollments::Column::CourseId),
                        (courses::Entity, courses::Column::Id),
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(enrollments::Entity).to_owned())
            .await
    }
}
