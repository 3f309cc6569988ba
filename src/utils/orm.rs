use sea_orm::{ActiveValue, Value};

/// Turns an optional field of a partial update into an active value, leaving
/// the column untouched when the field was not sent.
pub fn set_option<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}
