use crate::error::Result;
use entity::{courses, enrollments, reviews, students, transactions};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};

/// Deletes the students and their enrollments, transactions and reviews.
pub(super) async fn delete_students<C: ConnectionTrait>(db: &C, ids: Vec<i32>) -> Result<u64> {
    if ids.is_empty() {
        return Ok(0);
    }

    let enrollments = enrollments::Entity::delete_many()
        .filter(enrollments::Column::StudentId.is_in(ids.clone()))
        .exec(db)
        .await?;
    let transactions = transactions::Entity::delete_many()
        .filter(transactions::Column::StudentId.is_in(ids.clone()))
        .exec(db)
        .await?;
    let reviews = reviews::Entity::delete_many()
        .filter(reviews::Column::StudentId.is_in(ids.clone()))
        .exec(db)
        .await?;

    debug!(
        enrollments = enrollments.rows_affected,
        transactions = transactions.rows_affected,
        reviews = reviews.rows_affected,
        "deleted dependents of students {ids:?}"
    );

    let res = students::Entity::delete_many()
        .filter(students::Column::Id.is_in(ids))
        .exec(db)
        .await?;

    Ok(res.rows_affected)
}

/// Deletes the courses and their enrollments, transactions and reviews.
pub(super) async fn delete_courses<C: ConnectionTrait>(db: &C, ids: Vec<i32>) -> Result<u64> {
    if ids.is_empty() {
        return Ok(0);
    }

    let enrollments = enrollments::Entity::delete_many()
        .filter(enrollments::Column::CourseId.is_in(ids.clone()))
        .exec(db)
        .await?;
    let transactions = transactions::Entity::delete_many()
        .filter(transactions::Column::CourseId.is_in(ids.clone()))
        .exec(db)
        .await?;
    let reviews = reviews::Entity::delete_many()
        .filter(reviews::Column::CourseId.is_in(ids.clone()))
        .exec(db)
        .await?;

    debug!(
        enrollments = enrollments.rows_affected,
        transactions = transactions.rows_affected,
        reviews = reviews.rows_affected,
        "deleted dependents of courses {ids:?}"
    );

    let res = courses::Entity::delete_many()
        .filter(courses::Column::Id.is_in(ids))
        .exec(db)
        .await?;

    Ok(res.rows_affected)
}

/// Deletes the students linked to `user_id`, with their dependents.
pub(super) async fn delete_students_of_user<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<u64> {
    let ids: Vec<i32> = students::Entity::find_by_user(user_id)
        .select_only()
        .column(students::Column::Id)
        .into_tuple()
        .all(db)
        .await?;

    delete_students(db, ids).await
}

/// Deletes the courses of `instructor_id`, with their dependents.
pub(super) async fn delete_courses_of_instructor<C: ConnectionTrait>(
    db: &C,
    instructor_id: i32,
) -> Result<u64> {
    let ids: Vec<i32> = courses::Entity::find_by_instructor(instructor_id)
        .select_only()
        .column(courses::Column::Id)
        .into_tuple()
        .all(db)
        .await?;

    delete_courses(db, ids).await
}
