use super::{cascade, Repository};
use crate::{
    error::{self, DatabaseError, Result},
    models::instructors::{Patch, Request, Response},
    utils::set_option,
    Error,
};
use axum::async_trait;
use entity::instructors::{self, constraints::*};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
    Set,
};

pub struct Instructors;

#[async_trait]
impl Repository for Instructors {
    type Request = Request;
    type Patch = Patch;
    type Response = Response;

    async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Response>> {
        let res = instructors::Entity::find()
            .order_by_asc(instructors::Column::Id)
            .all(db)
            .await?;

        Ok(res.into_iter().map(Response::from).collect())
    }

    async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Response> {
        let Some(instructor) = instructors::Entity::find_by_id(id).one(db).await? else {
            return Err(error::INSTRUCTOR_NOT_FOUND);
        };

        Ok(instructor.into())
    }

    async fn create<C: ConnectionTrait>(db: &C, request: Request) -> Result<Response> {
        ensure_email_free(db, &request.email, None).await?;

        let instructor = instructors::ActiveModel {
            name: Set(request.name),
            bio: Set(request.bio),
            email: Set(request.email),
            profile_image: Set(request.profile_image),
            ..Default::default()
        };

        let instructor = instructor.insert(db).await.map_err(map_db_err)?;

        info!(id = instructor.id, "created instructor");

        Ok(instructor.into())
    }

    async fn update<C: ConnectionTrait>(db: &C, id: i32, patch: Patch) -> Result<Response> {
        let Some(current) = instructors::Entity::find_by_id(id).one(db).await? else {
            return Err(error::INSTRUCTOR_NOT_FOUND);
        };

        if let Some(email) = &patch.email {
            ensure_email_free(db, email, Some(id)).await?;
        }

        let instructor = instructors::ActiveModel {
            id: Unchanged(id),
            name: set_option(patch.name),
            bio: set_option(patch.bio),
            email: set_option(patch.email),
            profile_image: set_option(patch.profile_image),
        };

        if !instructor.is_changed() {
            return Ok(current.into());
        }

        let instructor = instructor.update(db).await.map_err(map_db_err)?;

        Ok(instructor.into())
    }

    async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
        let courses = cascade::delete_courses_of_instructor(db, id).await?;

        let res = instructors::Entity::delete_by_id(id).exec(db).await?;

        if res.rows_affected == 0 {
            return Err(error::INSTRUCTOR_NOT_FOUND);
        }

        info!(id, courses, "deleted instructor");

        Ok(())
    }
}

async fn ensure_email_free<C: ConnectionTrait>(db: &C, email: &str, id: Option<i32>) -> Result {
    match instructors::Entity::find_by_email(email).one(db).await? {
        Some(instructor) if Some(instructor.id) != id => Err(error::DUPLICATE_INSTRUCTOR_EMAIL),
        _ => Ok(()),
    }
}

fn map_db_err(err: DbErr) -> Error<'static> {
    match err {
        DbErr::RecordNotUpdated => error::INSTRUCTOR_NOT_FOUND,
        err if err.unique_violation(UC_INSTRUCTORS_EMAIL) => error::DUPLICATE_INSTRUCTOR_EMAIL,
        err => err.into(),
    }
}
