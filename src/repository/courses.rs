use super::{cascade, references, Repository};
use crate::{
    error::{self, DatabaseError, Result},
    models::courses::{Patch, Request, Response},
    utils::set_option,
    Error,
};
use axum::async_trait;
use entity::{
    courses::{self, constraints::*, VideoLinks},
    instructors,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
    Set,
};

pub struct Courses;

impl Courses {
    /// Courses taught by `instructor_id`.
    pub async fn list_for_instructor<C: ConnectionTrait>(
        db: &C,
        instructor_id: i32,
    ) -> Result<Vec<Response>> {
        if instructors::Entity::find_by_id(instructor_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(error::INSTRUCTOR_NOT_FOUND);
        }

        let res = courses::Entity::find_by_instructor(instructor_id)
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;

        Ok(res.into_iter().map(Response::from).collect())
    }
}

#[async_trait]
impl Repository for Courses {
    type Request = Request;
    type Patch = Patch;
    type Response = Response;

    async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Response>> {
        let res = courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;

        Ok(res.into_iter().map(Response::from).collect())
    }

    async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Response> {
        let Some(course) = courses::Entity::find_by_id(id).one(db).await? else {
            return Err(error::COURSE_NOT_FOUND);
        };

        Ok(course.into())
    }

    async fn create<C: ConnectionTrait>(db: &C, request: Request) -> Result<Response> {
        references::ensure_instructor(db, request.instructor).await?;

        let course = courses::ActiveModel {
            title: Set(request.title),
            image: Set(request.image),
            description: Set(request.description),
            free_videos: Set(request.free_videos.map(VideoLinks)),
            paid_videos: Set(request.paid_videos.map(VideoLinks)),
            price: Set(request.price),
            duration: Set(request.duration),
            level: Set(request.level),
            language: Set(request.language),
            instructor_id: Set(request.instructor),
            ..Default::default()
        };

        let course = course.insert(db).await.map_err(map_db_err)?;

        info!(id = course.id, instructor = course.instructor_id, "created course");

        Ok(course.into())
    }

    async fn update<C: ConnectionTrait>(db: &C, id: i32, patch: Patch) -> Result<Response> {
        let Some(current) = courses::Entity::find_by_id(id).one(db).await? else {
            return Err(error::COURSE_NOT_FOUND);
        };

        if let Some(instructor) = patch.instructor {
            references::ensure_instructor(db, instructor).await?;
        }

        let course = courses::ActiveModel {
            id: Unchanged(id),
            title: set_option(patch.title),
            image: set_option(patch.image),
            description: set_option(patch.description),
            free_videos: set_option(patch.free_videos.map(|links| links.map(VideoLinks))),
            paid_videos: set_option(patch.paid_videos.map(|links| links.map(VideoLinks))),
            price: set_option(patch.price),
            duration: set_option(patch.duration),
            level: set_option(patch.level),
            language: set_option(patch.language),
            instructor_id: set_option(patch.instructor),
        };

        if !course.is_changed() {
            return Ok(current.into());
        }

        let course = course.update(db).await.map_err(map_db_err)?;

        Ok(course.into())
    }

    async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
        let deleted = cascade::delete_courses(db, vec![id]).await?;

        if deleted == 0 {
            return Err(error::COURSE_NOT_FOUND);
        }

        info!(id, "deleted course");

        Ok(())
    }
}

fn map_db_err(err: DbErr) -> Error<'static> {
    match err {
        DbErr::RecordNotUpdated => error::COURSE_NOT_FOUND,
        err if err.foreign_key_violation(FK_COURSES_INSTRUCTOR_ID) => error::UNKNOWN_INSTRUCTOR,
        err => err.into(),
    }
}
