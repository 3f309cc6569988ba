use crate::utils::{
    de::deserialize_some,
    decimal::{deserialize_amount, deserialize_optional_amount, to_fixed_point},
};
use chrono::{DateTime, Utc};
use entity::transactions;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    pub student: i32,
    pub course: i32,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount_paid: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct Patch {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub student: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub course: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub amount_paid: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: i32,
    pub student: i32,
    pub course: i32,
    pub transaction_date: DateTime<Utc>,
    pub amount_paid: Decimal,
}

impl From<Request> for Patch {
    fn from(request: Request) -> Self {
        Self {
            student: Some(request.student),
            course: Some(request.course),
            amount_paid: Some(request.amount_paid),
        }
    }
}

impl From<transactions::Model> for Response {
    fn from(model: transactions::Model) -> Self {
        Self {
            id: model.id,
            student: model.student_id,
            course: model.course_id,
            transaction_date: model.transaction_date,
            amount_paid: to_fixed_point(model.amount_paid),
        }
    }
}
