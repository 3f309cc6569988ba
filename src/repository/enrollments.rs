use super::{references, Repository};
use crate::{
    error::{self, DatabaseError, Result},
    models::enrollments::{Patch, Request, Response},
    utils::set_option,
    Error,
};
use axum::async_trait;
use chrono::Utc;
use entity::enrollments::{self, constraints::*};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
    Set,
};

/// A student may be enrolled into the same course more than once.
pub struct Enrollments;

#[async_trait]
impl Repository for Enrollments {
    type Request = Request;
    type Patch = Patch;
    type Response = Response;

    async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Response>> {
        let res = enrollments::Entity::find()
            .order_by_asc(enrollments::Column::Id)
            .all(db)
            .await?;

        Ok(res.into_iter().map(Response::from).collect())
    }

    async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Response> {
        let Some(enrollment) = enrollments::Entity::find_by_id(id).one(db).await? else {
            return Err(error::ENROLLMENT_NOT_FOUND);
        };

        Ok(enrollment.into())
    }

    async fn create<C: ConnectionTrait>(db: &C, request: Request) -> Result<Response> {
        references::ensure_student(db, request.student).await?;
        references::ensure_course(db, request.course).await?;

        let enrollment = enrollments::ActiveModel {
            student_id: Set(request.student),
            course_id: Set(request.course),
            date_enrolled: Set(Utc::now()),
            is_purchased: Set(request.is_purchased),
            completed: Set(request.completed),
            ..Default::default()
        };

        let enrollment = enrollment.insert(db).await.map_err(map_db_err)?;

        info!(
            id = enrollment.id,
            student = enrollment.student_id,
            course = enrollment.course_id,
            "created enrollment"
        );

        Ok(enrollment.into())
    }

    async fn update<C: ConnectionTrait>(db: &C, id: i32, patch: Patch) -> Result<Response> {
        let Some(current) = enrollments::Entity::find_by_id(id).one(db).await? else {
            return Err(error::ENROLLMENT_NOT_FOUND);
        };

        if let Some(student) = patch.student {
            references::ensure_student(db, student).await?;
        }

        if let Some(course) = patch.course {
            references::ensure_course(db, course).await?;
        }

        let enrollment = enrollments::ActiveModel {
            id: Unchanged(id),
            student_id: set_option(patch.student),
            course_id: set_option(patch.course),
            is_purchased: set_option(patch.is_purchased),
            completed: set_option(patch.completed),
            ..Default::default()
        };

        if !enrollment.is_changed() {
            return Ok(current.into());
        }

        let enrollment = enrollment.update(db).await.map_err(map_db_err)?;

        Ok(enrollment.into())
    }

    async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
        let res = enrollments::Entity::delete_by_id(id).exec(db).await?;

        if res.rows_affected == 0 {
            return Err(error::ENROLLMENT_NOT_FOUND);
        }

        info!(id, "deleted enrollment");

        Ok(())
    }
}

fn map_db_err(err: DbErr) -> Error<'static> {
    match err {
        DbErr::RecordNotUpdated => error::ENROLLMENT_NOT_FOUND,
        err if err.foreign_key_violation(FK_ENROLLMENTS_STUDENT_ID) => error::UNKNOWN_STUDENT,
        err if err.foreign_key_violation(FK_ENROLLMENTS_COURSE_ID) => error::UNKNOWN_COURSE,
        err => err.into(),
    }
}
