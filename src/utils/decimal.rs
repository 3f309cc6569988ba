use rust_decimal::Decimal;
use serde::{de, Deserializer};
use std::str::FromStr;

/// Digits after the decimal point of every stored amount.
pub const SCALE: u32 = 2;
/// Digits before the decimal point, `NUMERIC(8, 2)` leaves six.
pub const MAX_INTEGER_DIGITS: u32 = 6;

struct Visitor;

impl<'de> de::Visitor<'de> for Visitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            formatter,
            "a decimal with at most {MAX_INTEGER_DIGITS} integer and {SCALE} fraction digits"
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Decimal::from_str(v.trim())
            .ok()
            .and_then(fixed_point)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // the shortest representation of the float is what the client wrote
        Decimal::from_str(&v.to_string())
            .ok()
            .and_then(fixed_point)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Float(v), &self))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        fixed_point(Decimal::from(v))
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        fixed_point(Decimal::from(v))
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Unsigned(v), &self))
    }
}

/// Rescales `value` to exactly [`SCALE`] fraction digits, rejecting values
/// that do not fit into the column without rounding.
pub fn fixed_point(value: Decimal) -> Option<Decimal> {
    let mut value = value.normalize();
    let limit = Decimal::from(10_i64.pow(MAX_INTEGER_DIGITS));

    if value.scale() > SCALE || value.trunc().abs() >= limit {
        return None;
    }

    value.rescale(SCALE);
    Some(value)
}

/// Formats a stored amount for output. Backends without a native decimal type
/// hand the value back through a float, so it is rounded first.
pub fn to_fixed_point(value: Decimal) -> Decimal {
    let mut value = value.round_dp(SCALE);
    value.rescale(SCALE);
    value
}

pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(Visitor)
}

/// Like [`deserialize_amount`], for fields that may be left out of a partial
/// update. Use together with `#[serde(default)]`.
pub fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_amount(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Price {
        #[serde(deserialize_with = "deserialize_amount")]
        price: Decimal,
    }

    #[derive(Debug, Deserialize)]
    struct OptionalPrice {
        #[serde(default, deserialize_with = "deserialize_optional_amount")]
        price: Option<Decimal>,
    }

    fn price(value: serde_json::Value) -> Option<String> {
        serde_json::from_value::<Price>(json!({ "price": value }))
            .ok()
            .map(|p| p.price.to_string())
    }

    #[test]
    fn numbers_get_two_fraction_digits() {
        assert_eq!(price(json!(49.99)).as_deref(), Some("49.99"));
        assert_eq!(price(json!(12.5)).as_deref(), Some("12.50"));
        assert_eq!(price(json!(10)).as_deref(), Some("10.00"));
        assert_eq!(price(json!(0)).as_deref(), Some("0.00"));
    }

    #[test]
    fn strings_are_accepted() {
        assert_eq!(price(json!("49.99")).as_deref(), Some("49.99"));
        assert_eq!(price(json!(" 7.1 ")).as_deref(), Some("7.10"));
        assert_eq!(price(json!("12.500")).as_deref(), Some("12.50"));
    }

    #[test]
    fn too_many_fraction_digits_are_rejected() {
        assert_eq!(price(json!(1.999)), None);
        assert_eq!(price(json!("0.001")), None);
    }

    #[test]
    fn too_many_integer_digits_are_rejected() {
        assert_eq!(price(json!(999999.99)).as_deref(), Some("999999.99"));
        assert_eq!(price(json!(1000000)), None);
        assert_eq!(price(json!("-1000000.00")), None);
    }

    #[test]
    fn non_numbers_are_rejected() {
        assert_eq!(price(json!("cheap")), None);
        assert_eq!(price(json!(true)), None);
        assert_eq!(price(json!(null)), None);
    }

    #[test]
    fn optional_amount() {
        let missing: OptionalPrice = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.price, None);

        let present: OptionalPrice = serde_json::from_value(json!({ "price": 3 })).unwrap();
        assert_eq!(present.price.map(|p| p.to_string()).as_deref(), Some("3.00"));

        assert!(serde_json::from_value::<OptionalPrice>(json!({ "price": null })).is_err());
    }

    #[test]
    fn output_is_rounded() {
        let value = Decimal::from_str("49.989999999").unwrap();
        assert_eq!(to_fixed_point(value).to_string(), "49.99");

        let value = Decimal::from_str("12.5").unwrap();
        assert_eq!(to_fixed_point(value).to_string(), "12.50");
    }
}
