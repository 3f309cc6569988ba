mod crud;
mod related;

use crate::{
    repository::{Courses, Enrollments, Instructors, Reviews, Students, Transactions, Users},
    state::StateTrait,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest(
            "/v1",
            Router::new()
                .nest("/users", crud::routes::<S, Users>())
                .nest(
                    "/instructors",
                    crud::routes::<S, Instructors>()
                        .route("/:id/courses", get(related::instructor_courses::<S>)),
                )
                .nest(
                    "/courses",
                    crud::routes::<S, Courses>()
                        .route("/:id/reviews", get(related::course_reviews::<S>)),
                )
                .nest("/students", crud::routes::<S, Students>())
                .nest("/enrollments", crud::routes::<S, Enrollments>())
                .nest("/transactions", crud::routes::<S, Transactions>())
                .nest("/reviews", crud::routes::<S, Reviews>()),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if let Err(err) = state.db().execute_unprepared("select 1").await {
        error!("database is unreachable: {err}");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
