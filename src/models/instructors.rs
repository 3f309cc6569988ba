use crate::utils::de::deserialize_some;
use entity::instructors;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub bio: String,
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(max = 255))]
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct Patch {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(email, length(max = 254))]
    pub email: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    pub profile_image: Option<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: i32,
    pub name: String,
    pub bio: String,
    pub email: String,
    pub profile_image: Option<String>,
}

impl From<Request> for Patch {
    fn from(request: Request) -> Self {
        Self {
            name: Some(request.name),
            bio: Some(request.bio),
            email: Some(request.email),
            profile_image: Some(request.profile_image),
        }
    }
}

impl From<instructors::Model> for Response {
    fn from(model: instructors::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            bio: model.bio,
            email: model.email,
            profile_image: model.profile_image,
        }
    }
}
