use serde::{Deserialize, Deserializer};

/// Deserializes a field of a partial update that may be left out but must not
/// be `null`. Use together with `#[serde(default)]`.
pub fn deserialize_some<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_some")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_some")]
        count: Option<i32>,
    }

    #[test]
    fn missing_fields_are_none() {
        let patch: Patch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.count, None);
    }

    #[test]
    fn present_fields_are_some() {
        let patch: Patch = serde_json::from_value(json!({ "name": "ada", "count": 3 })).unwrap();
        assert_eq!(patch.name.as_deref(), Some("ada"));
        assert_eq!(patch.count, Some(3));
    }

    #[test]
    fn null_is_rejected() {
        assert!(serde_json::from_value::<Patch>(json!({ "name": null })).is_err());
        assert!(serde_json::from_value::<Patch>(json!({ "count": null })).is_err());
    }
}
