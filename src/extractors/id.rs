use crate::{error, Error};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Numeric row identifier taken from the `:id` path segment.
///
/// Anything that is not a valid identifier can not name an existing row, so it
/// is rejected as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for Id
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| error::NOT_FOUND)?;

        id.parse().map(Self).map_err(|_| error::NOT_FOUND)
    }
}
