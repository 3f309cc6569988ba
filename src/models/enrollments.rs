use crate::utils::de::deserialize_some;
use chrono::{DateTime, Utc};
use entity::enrollments;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    pub student: i32,
    pub course: i32,
    #[serde(default)]
    pub is_purchased: bool,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct Patch {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub student: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub course: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub is_purchased: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: i32,
    pub student: i32,
    pub course: i32,
    pub date_enrolled: DateTime<Utc>,
    pub is_purchased: bool,
    pub completed: bool,
}

impl From<Request> for Patch {
    fn from(request: Request) -> Self {
        Self {
            student: Some(request.student),
            course: Some(request.course),
            is_purchased: Some(request.is_purchased),
            completed: Some(request.completed),
        }
    }
}

impl From<enrollments::Model> for Response {
    fn from(model: enrollments::Model) -> Self {
        Self {
            id: model.id,
            student: model.student_id,
            course: model.course_id,
            date_enrolled: model.date_enrolled,
            is_purchased: model.is_purchased,
            completed: model.completed,
        }
    }
}
