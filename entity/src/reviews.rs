use super::{courses, students};
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const UC_REVIEWS_STUDENT_ID_COURSE_ID: &str = "UC_reviews_student_id_course_id";
    pub const FK_REVIEWS_STUDENT_ID: &str = "FK_reviews_student_id";
    pub const FK_REVIEWS_COURSE_ID: &str = "FK_reviews_course_id";
}

pub mod constants {
    pub const MIN_RATING: i32 = 1;
    pub const MAX_RATING: i32 = 5;
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_id: i32,
    pub student_id: i32,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub date_added: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Reviews left by `student_id` on `course_id`. At most one row exists.
    #[inline]
    pub fn find_by_pair(student_id: i32, course_id: i32) -> Select<Entity> {
        Self::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
    }

    #[inline]
    pub fn find_by_course(course_id: i32) -> Select<Entity> {
        Self::find().filter(Column::CourseId.eq(course_id))
    }
}
