use super::{references, Repository};
use crate::{
    error::{self, DatabaseError, Result},
    models::transactions::{Patch, Request, Response},
    utils::set_option,
    Error,
};
use axum::async_trait;
use chrono::Utc;
use entity::transactions::{self, constraints::*};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
    Set,
};

pub struct Transactions;

#[async_trait]
impl Repository for Transactions {
    type Request = Request;
    type Patch = Patch;
    type Response = Response;

    async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Response>> {
        let res = transactions::Entity::find()
            .order_by_asc(transactions::Column::Id)
            .all(db)
            .await?;

        Ok(res.into_iter().map(Response::from).collect())
    }

    async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Response> {
        let Some(transaction) = transactions::Entity::find_by_id(id).one(db).await? else {
            return Err(error::TRANSACTION_NOT_FOUND);
        };

        Ok(transaction.into())
    }

    async fn create<C: ConnectionTrait>(db: &C, request: Request) -> Result<Response> {
        references::ensure_student(db, request.student).await?;
        references::ensure_course(db, request.course).await?;

        let transaction = transactions::ActiveModel {
            student_id: Set(request.student),
            course_id: Set(request.course),
            transaction_date: Set(Utc::now()),
            amount_paid: Set(request.amount_paid),
            ..Default::default()
        };

        let transaction = transaction.insert(db).await.map_err(map_db_err)?;

        info!(
            id = transaction.id,
            student = transaction.student_id,
            course = transaction.course_id,
            "recorded transaction"
        );

        Ok(transaction.into())
    }

    async fn update<C: ConnectionTrait>(db: &C, id: i32, patch: Patch) -> Result<Response> {
        let Some(current) = transactions::Entity::find_by_id(id).one(db).await? else {
            return Err(error::TRANSACTION_NOT_FOUND);
        };

        if let Some(student) = patch.student {
            references::ensure_student(db, student).await?;
        }

        if let Some(course) = patch.course {
            references::ensure_course(db, course).await?;
        }

        let transaction = transactions::ActiveModel {
            id: Unchanged(id),
            student_id: set_option(patch.student),
            course_id: set_option(patch.course),
            amount_paid: set_option(patch.amount_paid),
            ..Default::default()
        };

        if !transaction.is_changed() {
            return Ok(current.into());
        }

        let transaction = transaction.update(db).await.map_err(map_db_err)?;

        Ok(transaction.into())
    }

    async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
        let res = transactions::Entity::delete_by_id(id).exec(db).await?;

        if res.rows_affected == 0 {
            return Err(error::TRANSACTION_NOT_FOUND);
        }

        info!(id, "deleted transaction");

        Ok(())
    }
}

fn map_db_err(err: DbErr) -> Error<'static> {
    match err {
        DbErr::RecordNotUpdated => error::TRANSACTION_NOT_FOUND,
        err if err.foreign_key_violation(FK_TRANSACTIONS_STUDENT_ID) => error::UNKNOWN_STUDENT,
        err if err.foreign_key_violation(FK_TRANSACTIONS_COURSE_ID) => error::UNKNOWN_COURSE,
        err => err.into(),
    }
}
