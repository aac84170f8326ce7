use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parsers::deserializers::{deserialize_present, non_empty_str};

/// Fields read from one file of a flat collection; unknown fields are ignored
///
/// Metadata is kept as raw JSON so a value of any type is carried through to the index
/// instead of failing the whole file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemSource {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub artist: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub subtitle: Option<Value>,
}

/// One entry of the flat index
///
/// Absent metadata is left out of the output object rather than defaulted, except for
/// `subtitle` which is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    pub subtitle: String,
    /// Name of the source file, so the client can fetch the full item later
    pub file: String,
}

impl ItemRecord {
    /// Project a source file onto its index entry
    ///
    /// A `subtitle` that is missing, empty or not a string becomes `""`.
    pub fn from_source(source: ItemSource, filename: &str) -> Self {
        let subtitle = non_empty_str(source.subtitle.as_ref()).unwrap_or_default().to_string();
        Self {
            id: source.id,
            title: source.title,
            artist: source.artist,
            category: source.category,
            subtitle,
            file: filename.to_string(),
        }
    }

    /// Identifier used for ordering
    ///
    /// Strings sort by their text, other values by their JSON form; a missing or `null`
    /// id sorts as the empty string.
    pub fn sort_key(&self) -> Cow<'_, str> {
        match &self.id {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(id)) => Cow::Borrowed(id),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn project(json: &str, filename: &str) -> ItemRecord {
        let source: ItemSource = serde_json::from_str(json).unwrap();
        ItemRecord::from_source(source, filename)
    }

    #[test]
    fn test_projection_defaults_subtitle() {
        let record = project(r#"{"id":"x1","title":"T","artist":"A","category":"C"}"#, "x1.json");

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": "x1",
                "title": "T",
                "artist": "A",
                "category": "C",
                "subtitle": "",
                "file": "x1.json"
            })
        );
    }

    #[test]
    fn test_key_order_is_stable() {
        let record = project(
            r#"{"category":"C","subtitle":"S","artist":"A","title":"T","id":"x1"}"#,
            "x1.json",
        );

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":"x1","title":"T","artist":"A","category":"C","subtitle":"S","file":"x1.json"}"#
        );
    }

    #[test]
    fn test_missing_fields_are_omitted() {
        let record = project(r#"{"title":"Only title","extra":1}"#, "t.json");

        assert_eq!(record.sort_key(), "");
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"title":"Only title","subtitle":"","file":"t.json"}"#
        );
    }

    #[test]
    fn test_non_string_metadata_passes_through() {
        let record = project(
            r#"{"id":7,"title":"T","artist":["A","B"],"category":{"name":"C"},"subtitle":null}"#,
            "7.json",
        );

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": 7,
                "title": "T",
                "artist": ["A", "B"],
                "category": {"name": "C"},
                "subtitle": "",
                "file": "7.json"
            })
        );
        assert_eq!(record.sort_key(), "7");
    }

    #[test]
    fn test_explicit_null_is_written_back() {
        let record = project(r#"{"id":"a","title":null}"#, "a.json");
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":"a","title":null,"subtitle":"","file":"a.json"}"#
        );
    }

    #[test]
    fn test_non_string_subtitle_defaults() {
        assert_eq!(project(r#"{"id":"a","subtitle":3}"#, "a.json").subtitle, "");
        assert_eq!(project(r#"{"id":"a","subtitle":""}"#, "a.json").subtitle, "");
    }

    #[test]
    fn test_null_id_sorts_as_empty() {
        assert_eq!(project(r#"{"id":null}"#, "n.json").sort_key(), "");
    }
}
