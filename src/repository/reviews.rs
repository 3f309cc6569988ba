use super::{references, Repository};
use crate::{
    error::{self, DatabaseError, Result},
    models::reviews::{Patch, Request, Response},
    utils::set_option,
    Error,
};
use axum::async_trait;
use chrono::Utc;
use entity::{
    courses,
    reviews::{self, constraints::*},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
    Set,
};

/// A student reviews a course at most once.
pub struct Reviews;

impl Reviews {
    /// Reviews left on `course_id`.
    pub async fn list_for_course<C: ConnectionTrait>(
        db: &C,
        course_id: i32,
    ) -> Result<Vec<Response>> {
        if courses::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Err(error::COURSE_NOT_FOUND);
        }

        let res = reviews::Entity::find_by_course(course_id)
            .order_by_asc(reviews::Column::Id)
            .all(db)
            .await?;

        Ok(res.into_iter().map(Response::from).collect())
    }
}

#[async_trait]
impl Repository for Reviews {
    type Request = Request;
    type Patch = Patch;
    type Response = Response;

    async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Response>> {
        let res = reviews::Entity::find()
            .order_by_asc(reviews::Column::Id)
            .all(db)
            .await?;

        Ok(res.into_iter().map(Response::from).collect())
    }

    async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Response> {
        let Some(review) = reviews::Entity::find_by_id(id).one(db).await? else {
            return Err(error::REVIEW_NOT_FOUND);
        };

        Ok(review.into())
    }

    async fn create<C: ConnectionTrait>(db: &C, request: Request) -> Result<Response> {
        references::ensure_course(db, request.course).await?;
        references::ensure_student(db, request.student).await?;
        ensure_pair_free(db, request.student, request.course, None).await?;

        let review = reviews::ActiveModel {
            course_id: Set(request.course),
            student_id: Set(request.student),
            rating: Set(request.rating),
            comment: Set(request.comment),
            date_added: Set(Utc::now()),
            ..Default::default()
        };

        let review = review.insert(db).await.map_err(map_db_err)?;

        info!(
            id = review.id,
            student = review.student_id,
            course = review.course_id,
            "created review"
        );

        Ok(review.into())
    }

    async fn update<C: ConnectionTrait>(db: &C, id: i32, patch: Patch) -> Result<Response> {
        let Some(current) = reviews::Entity::find_by_id(id).one(db).await? else {
            return Err(error::REVIEW_NOT_FOUND);
        };

        if let Some(course) = patch.course {
            references::ensure_course(db, course).await?;
        }

        if let Some(student) = patch.student {
            references::ensure_student(db, student).await?;
        }

        if patch.course.is_some() || patch.student.is_some() {
            let student = patch.student.unwrap_or(current.student_id);
            let course = patch.course.unwrap_or(current.course_id);

            ensure_pair_free(db, student, course, Some(id)).await?;
        }

        let review = reviews::ActiveModel {
            id: Unchanged(id),
            course_id: set_option(patch.course),
            student_id: set_option(patch.student),
            rating: set_option(patch.rating),
            comment: set_option(patch.comment),
            ..Default::default()
        };

        if !review.is_changed() {
            return Ok(current.into());
        }

        let review = review.update(db).await.map_err(map_db_err)?;

        Ok(review.into())
    }

    async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
        let res = reviews::Entity::delete_by_id(id).exec(db).await?;

        if res.rows_affected == 0 {
            return Err(error::REVIEW_NOT_FOUND);
        }

        info!(id, "deleted review");

        Ok(())
    }
}

async fn ensure_pair_free<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    course_id: i32,
    id: Option<i32>,
) -> Result {
    match reviews::Entity::find_by_pair(student_id, course_id)
        .one(db)
        .await?
    {
        Some(review) if Some(review.id) != id => Err(error::DUPLICATE_REVIEW),
        _ => Ok(()),
    }
}

fn map_db_err(err: DbErr) -> Error<'static> {
    match err {
        DbErr::RecordNotUpdated => error::REVIEW_NOT_FOUND,
        err if err.unique_violation(UC_REVIEWS_STUDENT_ID_COURSE_ID) => error::DUPLICATE_REVIEW,
        err if err.foreign_key_violation(FK_REVIEWS_COURSE_ID) => error::UNKNOWN_COURSE,
        err if err.foreign_key_violation(FK_REVIEWS_STUDENT_ID) => error::UNKNOWN_STUDENT,
        err => err.into(),
    }
}
