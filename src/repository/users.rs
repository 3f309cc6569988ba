use super::{cascade, Repository};
use crate::{
    error::{self, DatabaseError, Result},
    models::users::{Patch, Request, Response},
    utils::set_option,
    Error,
};
use axum::async_trait;
use entity::users::{self, constraints::*};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
    Set,
};

pub struct Users;

#[async_trait]
impl Repository for Users {
    type Request = Request;
    type Patch = Patch;
    type Response = Response;

    async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Response>> {
        let res = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(db)
            .await?;

        Ok(res.into_iter().map(Response::from).collect())
    }

    async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Response> {
        let Some(user) = users::Entity::find_by_id(id).one(db).await? else {
            return Err(error::USER_NOT_FOUND);
        };

        Ok(user.into())
    }

    async fn create<C: ConnectionTrait>(db: &C, request: Request) -> Result<Response> {
        ensure_username_free(db, &request.username, None).await?;

        let user = users::ActiveModel {
            username: Set(request.username),
            email: Set(request.email),
            ..Default::default()
        };

        let user = user.insert(db).await.map_err(map_db_err)?;

        info!(id = user.id, "created user");

        Ok(user.into())
    }

    async fn update<C: ConnectionTrait>(db: &C, id: i32, patch: Patch) -> Result<Response> {
        let Some(current) = users::Entity::find_by_id(id).one(db).await? else {
            return Err(error::USER_NOT_FOUND);
        };

        if let Some(username) = &patch.username {
            ensure_username_free(db, username, Some(id)).await?;
        }

        let user = users::ActiveModel {
            id: Unchanged(id),
            username: set_option(patch.username),
            email: set_option(patch.email),
        };

        if !user.is_changed() {
            return Ok(current.into());
        }

        let user = user.update(db).await.map_err(map_db_err)?;

        Ok(user.into())
    }

    async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
        let students = cascade::delete_students_of_user(db, id).await?;

        let res = users::Entity::delete_by_id(id).exec(db).await?;

        if res.rows_affected == 0 {
            return Err(error::USER_NOT_FOUND);
        }

        info!(id, students, "deleted user");

        Ok(())
    }
}

async fn ensure_username_free<C: ConnectionTrait>(
    db: &C,
    username: &str,
    id: Option<i32>,
) -> Result {
    match users::Entity::find_by_username(username).one(db).await? {
        Some(user) if Some(user.id) != id => Err(error::DUPLICATE_USERNAME),
        _ => Ok(()),
    }
}

fn map_db_err(err: DbErr) -> Error<'static> {
    match err {
        DbErr::RecordNotUpdated => error::USER_NOT_FOUND,
        err if err.unique_violation(UC_USERS_USERNAME) => error::DUPLICATE_USERNAME,
        err => err.into(),
    }
}
