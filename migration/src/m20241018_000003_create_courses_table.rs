use crate::utils::{cascade, id_column};
use entity::{
    courses::{self, constraints::*},
    instructors,
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
                    .table(courses::Entity)
                    .if_not_exists()
                    .col(&mut id_column(courses::Column::Id))
                    .col(
                        ColumnDef::new(courses::Column::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(courses::Column::Image).string_len(255).null())
                    .col(ColumnDef::new(courses::Column::Description).text().null())
                    .col(ColumnDef::new(courses::Column::FreeVideos).json().null())
                    .col(ColumnDef::new(courses::Column::PaidVideos).json().null())
                    .col(
                        ColumnDef::new(courses::Column::Price)
                            .decimal_len(8, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(courses::Column::Duration)
                            .decimal_len(8, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(courses::Column::Level)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(courses::Column::Language)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(courses::Column::InstructorId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(&mut cascade(
                        FK_COURSES_INSTRUCTOR_ID,
                        (courses::Entity, courses::Column::InstructorId),
                        (instructors::Entity, instructors::Column::Id),
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(courses::Entity).to_owned())
            .await
    }
}
