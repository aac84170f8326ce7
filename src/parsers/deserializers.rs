use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keep any JSON value that is present, including an explicit `null`
///
/// Use with `#[serde(default)]` so an absent key stays `None` while `"key": null`
/// becomes `Some(Value::Null)` and is written back out unchanged.
pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// The value as a string if it is a non-empty JSON string
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
