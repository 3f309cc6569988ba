use crate::error::{self, Result};
use entity::{courses, instructors, students, users};
use sea_orm::{ConnectionTrait, EntityTrait};

pub(super) async fn ensure_user<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    match users::Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(error::UNKNOWN_USER),
    }
}

pub(super) async fn ensure_instructor<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    match instructors::Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(error::UNKNOWN_INSTRUCTOR),
    }
}

pub(super) async fn ensure_course<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    match courses::Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(error::UNKNOWN_COURSE),
    }
}

pub(super) async fn ensure_student<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    match students::Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(error::UNKNOWN_STUDENT),
    }
}
