#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{catalog::*, App};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use course_catalog::error;
pub use http::StatusCode;
pub use serde_json::{json, Value};
