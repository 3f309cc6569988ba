use crate::utils::de::deserialize_some;
use entity::users;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(email, length(max = 254))]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct Patch {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(min = 1, max = 150))]
    pub username: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(email, length(max = 254))]
    pub email: Option<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
}

impl From<Request> for Patch {
    fn from(request: Request) -> Self {
        Self {
            username: Some(request.username),
            email: Some(request.email),
        }
    }
}

impl From<users::Model> for Response {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
        }
    }
}
