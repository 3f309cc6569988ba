//! Storage operations of the collections.
//!
//! Every operation takes the connection it runs on, handlers pass an open
//! transaction for writes. Foreign keys, uniqueness and cascades are checked
//! here before anything is written. The schema enforces the same rules, and
//! its violations are mapped to the same errors.

mod cascade;
mod courses;
mod enrollments;
mod instructors;
mod references;
mod reviews;
mod students;
mod transactions;
mod users;

use crate::error::Result;
use axum::async_trait;
use sea_orm::ConnectionTrait;
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

pub use courses::Courses;
pub use enrollments::Enrollments;
pub use instructors::Instructors;
pub use reviews::Reviews;
pub use students::Students;
pub use transactions::Transactions;
pub use users::Users;

#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Body of create and full update.
    type Request: DeserializeOwned + Validate + Into<Self::Patch> + Send + 'static;
    /// Body of partial update, fields left out are not changed.
    type Patch: DeserializeOwned + Validate + Send + 'static;
    type Response: Serialize + Send + 'static;

    /// All rows in insertion order.
    async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Self::Response>>;

    async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Self::Response>;

    async fn create<C: ConnectionTrait>(db: &C, request: Self::Request)
        -> Result<Self::Response>;

    /// Applies `patch` to the row. An empty patch returns the row unchanged.
    async fn update<C: ConnectionTrait>(
        db: &C,
        id: i32,
        patch: Self::Patch,
    ) -> Result<Self::Response>;

    /// Deletes the row together with every row that depends on it.
    async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result;
}
