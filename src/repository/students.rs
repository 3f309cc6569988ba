use super::{cascade, references, Repository};
use crate::{
    error::{self, DatabaseError, Result},
    models::students::{Patch, Request, Response},
    utils::set_option,
    Error,
};
use axum::async_trait;
use entity::students::{self, constraints::*};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
    Set,
};

pub struct Students;

#[async_trait]
impl Repository for Students {
    type Request = Request;
    type Patch = Patch;
    type Response = Response;

    async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Response>> {
        let res = students::Entity::find()
            .order_by_asc(students::Column::Id)
            .all(db)
            .await?;

        Ok(res.into_iter().map(Response::from).collect())
    }

    async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Response> {
        let Some(student) = students::Entity::find_by_id(id).one(db).await? else {
            return Err(error::STUDENT_NOT_FOUND);
        };

        Ok(student.into())
    }

    async fn create<C: ConnectionTrait>(db: &C, request: Request) -> Result<Response> {
        references::ensure_user(db, request.user).await?;
        ensure_user_unlinked(db, request.user, None).await?;

        let student = students::ActiveModel {
            user_id: Set(request.user),
            username: Set(request.username),
            email: Set(request.email),
            ..Default::default()
        };

        let student = student.insert(db).await.map_err(map_db_err)?;

        info!(id = student.id, user = student.user_id, "created student");

        Ok(student.into())
    }

    async fn update<C: ConnectionTrait>(db: &C, id: i32, patch: Patch) -> Result<Response> {
        let Some(current) = students::Entity::find_by_id(id).one(db).await? else {
            return Err(error::STUDENT_NOT_FOUND);
        };

        if let Some(user) = patch.user {
            references::ensure_user(db, user).await?;
            ensure_user_unlinked(db, user, Some(id)).await?;
        }

        let student = students::ActiveModel {
            id: Unchanged(id),
            user_id: set_option(patch.user),
            username: set_option(patch.username),
            email: set_option(patch.email),
        };

        if !student.is_changed() {
            return Ok(current.into());
        }

        let student = student.update(db).await.map_err(map_db_err)?;

        Ok(student.into())
    }

    async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
        let deleted = cascade::delete_students(db, vec![id]).await?;

        if deleted == 0 {
            return Err(error::STUDENT_NOT_FOUND);
        }

        info!(id, "deleted student");

        Ok(())
    }
}

/// A user backs at most one student.
async fn ensure_user_unlinked<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    id: Option<i32>,
) -> Result {
    match students::Entity::find_by_user(user_id).one(db).await? {
        Some(student) if Some(student.id) != id => Err(error::STUDENT_ALREADY_EXISTS),
        _ => Ok(()),
    }
}

fn map_db_err(err: DbErr) -> Error<'static> {
    match err {
        DbErr::RecordNotUpdated => error::STUDENT_NOT_FOUND,
        err if err.unique_violation(UC_STUDENTS_USER_ID) => error::STUDENT_ALREADY_EXISTS,
        err if err.foreign_key_violation(FK_STUDENTS_USER_ID) => error::UNKNOWN_USER,
        err => err.into(),
    }
}
