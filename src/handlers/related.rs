use crate::{
    error::Result,
    extractors::{Id, Json},
    models::{courses, reviews},
    repository::{Courses, Reviews},
    StateTrait,
};
use axum::extract::State;

pub async fn instructor_courses<S: StateTrait>(
    State(state): State<S>,
    Id(id): Id,
) -> Result<Json<Vec<courses::Response>>> {
    let res = Courses::list_for_instructor(state.db(), id).await?;

    Ok(Json(res))
}

pub async fn course_reviews<S: StateTrait>(
    State(state): State<S>,
    Id(id): Id,
) -> Result<Json<Vec<reviews::Response>>> {
    let res = Reviews::list_for_course(state.db(), id).await?;

    Ok(Json(res))
}
