use crate::utils::{
    de::deserialize_some,
    decimal::{deserialize_amount, deserialize_optional_amount, to_fixed_point},
};
use entity::courses::{self, Language, Level, VideoLinks};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 255))]
    pub image: Option<String>,
    pub description: Option<String>,
    pub free_videos: Option<Vec<String>>,
    pub paid_videos: Option<Vec<String>>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub price: Decimal,
    /// Hours.
    #[serde(deserialize_with = "deserialize_amount")]
    pub duration: Decimal,
    pub level: Level,
    pub language: Language,
    pub instructor: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct Patch {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    pub image: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub free_videos: Option<Option<Vec<String>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub paid_videos: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub duration: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub level: Option<Level>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub language: Option<Language>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub instructor: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: i32,
    pub title: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub free_videos: Option<Vec<String>>,
    pub paid_videos: Option<Vec<String>>,
    pub price: Decimal,
    pub duration: Decimal,
    pub level: Level,
    pub language: Language,
    pub instructor: i32,
}

impl From<Request> for Patch {
    fn from(request: Request) -> Self {
        Self {
            title: Some(request.title),
            image: Some(request.image),
            description: Some(request.description),
            free_videos: Some(request.free_videos),
            paid_videos: Some(request.paid_videos),
            price: Some(request.price),
            duration: Some(request.duration),
            level: Some(request.level),
            language: Some(request.language),
            instructor: Some(request.instructor),
        }
    }
}

impl From<courses::Model> for Response {
    fn from(model: courses::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            image: model.image,
            description: model.description,
            free_videos: model.free_videos.map(|VideoLinks(links)| links),
            paid_videos: model.paid_videos.map(|VideoLinks(links)| links),
            price: to_fixed_point(model.price),
            duration: to_fixed_point(model.duration),
            level: model.level,
            language: model.language,
            instructor: model.instructor_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn body() -> Value {
        json!({
            "title": "Rust for beginners",
            "price": 49.99,
            "duration": 12.5,
            "level": "Beginner",
            "language": "Dart",
            "instructor": 1,
        })
    }

    fn request(patch: Value) -> Result<Request, serde_json::Error> {
        let mut body = body();
        for (key, value) in patch.as_object().unwrap() {
            body[key] = value.clone();
        }
        serde_json::from_value(body)
    }

    #[test]
    fn optional_fields_may_be_left_out() {
        let request = request(json!({})).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.price.to_string(), "49.99");
        assert_eq!(request.duration.to_string(), "12.50");
        assert_eq!(request.free_videos, None);
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        assert!(request(json!({ "level": "Expert" })).is_err());
        assert!(request(json!({ "language": "Rust" })).is_err());
        assert!(request(json!({ "level": "beginner" })).is_err());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut body = body();
        body.as_object_mut().unwrap().remove("instructor");
        assert!(serde_json::from_value::<Request>(body).is_err());
    }

    #[test]
    fn price_precision_is_checked() {
        assert!(request(json!({ "price": 1.234 })).is_err());
        assert!(request(json!({ "price": "1.20" })).is_ok());
    }

    #[test]
    fn patch_rejects_null_on_required_fields() {
        for field in ["title", "price", "duration", "level", "language", "instructor"] {
            let mut body = json!({});
            body[field] = Value::Null;
            assert!(serde_json::from_value::<Patch>(body).is_err(), "{field}");
        }

        let patch: Patch = serde_json::from_value(json!({ "description": null })).unwrap();
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.title, None);
    }

    #[test]
    fn long_title_is_rejected() {
        let request = request(json!({ "title": "x".repeat(201) })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn response_renders_two_fraction_digits() {
        let model = courses::Model {
            id: 1,
            title: "Rust".to_owned(),
            image: None,
            description: None,
            free_videos: Some(VideoLinks(vec!["https://example.com/1".to_owned()])),
            paid_videos: None,
            price: Decimal::new(4999, 2),
            duration: Decimal::new(125, 1),
            level: Level::Advanced,
            language: Language::JavaScript,
            instructor_id: 7,
        };

        let response = serde_json::to_value(Response::from(model)).unwrap();

        assert_eq!(response["price"], "49.99");
        assert_eq!(response["duration"], "12.50");
        assert_eq!(response["level"], "Advanced");
        assert_eq!(response["language"], "JavaScript");
        assert_eq!(response["free_videos"], json!(["https://example.com/1"]));
        assert_eq!(response["paid_videos"], Value::Null);
        assert_eq!(response["instructor"], 7);
    }
}
