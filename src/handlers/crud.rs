use crate::{
    error::Result,
    extractors::{Id, Json, ValidatedJson},
    repository::Repository,
    StateTrait,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Router,
};
use sea_orm::TransactionTrait;

/// Routes of a collection
///
/// GET    /
/// POST   /
/// GET    /:id
/// PUT    /:id
/// PATCH  /:id
/// DELETE /:id
pub fn routes<S: StateTrait, R: Repository>() -> Router<S> {
    Router::new()
        .route("/", get(list::<S, R>).post(create::<S, R>))
        .route(
            "/:id",
            get(retrieve::<S, R>)
                .put(replace::<S, R>)
                .patch(update::<S, R>)
                .delete(destroy::<S, R>),
        )
}

async fn list<S: StateTrait, R: Repository>(
    State(state): State<S>,
) -> Result<Json<Vec<R::Response>>> {
    let res = R::list(state.db()).await?;

    Ok(Json(res))
}

async fn retrieve<S: StateTrait, R: Repository>(
    State(state): State<S>,
    Id(id): Id,
) -> Result<Json<R::Response>> {
    let res = R::get(state.db(), id).await?;

    Ok(Json(res))
}

async fn create<S: StateTrait, R: Repository>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<R::Request>,
) -> Result<(StatusCode, Json<R::Response>)> {
    let txn = state.db().begin().await?;

    let res = R::create(&txn, request).await?;

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(res)))
}

/// Full update, fields left out of the body are reset.
async fn replace<S: StateTrait, R: Repository>(
    State(state): State<S>,
    Id(id): Id,
    ValidatedJson(request): ValidatedJson<R::Request>,
) -> Result<Json<R::Response>> {
    let txn = state.db().begin().await?;

    let res = R::update(&txn, id, request.into()).await?;

    txn.commit().await?;

    Ok(Json(res))
}

async fn update<S: StateTrait, R: Repository>(
    State(state): State<S>,
    Id(id): Id,
    ValidatedJson(patch): ValidatedJson<R::Patch>,
) -> Result<Json<R::Response>> {
    let txn = state.db().begin().await?;

    let res = R::update(&txn, id, patch).await?;

    txn.commit().await?;

    Ok(Json(res))
}

async fn destroy<S: StateTrait, R: Repository>(
    State(state): State<S>,
    Id(id): Id,
) -> Result<StatusCode> {
    let txn = state.db().begin().await?;

    R::delete(&txn, id).await?;

    txn.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
