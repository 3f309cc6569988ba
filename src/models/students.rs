use crate::utils::de::deserialize_some;
use entity::students;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// `username` and `email` are stored as sent. They are not looked up from the
/// linked user.
#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    pub user: i32,
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(email, length(max = 100))]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct Patch {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub user: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(min = 1, max = 100))]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(email, length(max = 100))]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: i32,
    pub user: i32,
    pub username: String,
    pub email: String,
}

impl From<Request> for Patch {
    fn from(request: Request) -> Self {
        Self {
            user: Some(request.user),
            username: Some(request.username),
            email: Some(request.email),
        }
    }
}

impl From<students::Model> for Response {
    fn from(model: students::Model) -> Self {
        Self {
            id: model.id,
            user: model.user_id,
            username: model.username,
            email: model.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_is_required_and_checked() {
        let missing = serde_json::from_value::<Request>(json!({ "user": 1, "username": "ada" }));
        assert!(missing.is_err());

        let request: Request = serde_json::from_value(json!({
            "user": 1,
            "username": "ada",
            "email": "not an email",
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn email_length_is_bounded() {
        let email = format!("{}@example.com", "a".repeat(90));
        let patch: Patch = serde_json::from_value(json!({ "email": email })).unwrap();
        assert!(patch.validate().is_err());
    }
}
