use crate::utils::de::deserialize_some;
use chrono::{DateTime, Utc};
use entity::reviews;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    pub course: i32,
    pub student: i32,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct Patch {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub course: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub student: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: i32,
    pub course: i32,
    pub student: i32,
    pub rating: i32,
    pub comment: String,
    pub date_added: DateTime<Utc>,
}

impl From<Request> for Patch {
    fn from(request: Request) -> Self {
        Self {
            course: Some(request.course),
            student: Some(request.student),
            rating: Some(request.rating),
            comment: Some(request.comment),
        }
    }
}

impl From<reviews::Model> for Response {
    fn from(model: reviews::Model) -> Self {
        Self {
            id: model.id,
            course: model.course_id,
            student: model.student_id,
            rating: model.rating,
            comment: model.comment,
            date_added: model.date_added,
        }
    }
}
