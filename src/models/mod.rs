//! Request and response bodies of the collections.
//!
//! Every collection has a `Request` used by create and full update, a `Patch`
//! used by partial update, and the `Response` a row is rendered as. A full
//! update is a patch that carries every field.

pub mod courses;
pub mod enrollments;
pub mod instructors;
pub mod reviews;
pub mod students;
pub mod transactions;
pub mod users;
