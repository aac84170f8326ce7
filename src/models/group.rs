use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parsers::deserializers::{deserialize_present, non_empty_str};

/// Name given to a group whose first file carries no `vaishnavName`
pub const FALLBACK_GROUP_NAME_PREFIX: &str = "Vaishnav";

/// Fields read from one file of a grouped collection
///
/// Values of any JSON type are accepted; `title` is carried through as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupedSource {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub title: Option<Value>,
    #[serde(default, rename = "vaishnavName", deserialize_with = "deserialize_present")]
    pub vaishnav_name: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub bio: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    /// `<label>/<filename>`, relative to the collection root
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub prasangs: Vec<ChildRecord>,
}

impl GroupRecord {
    /// Start a group from the first file seen for it
    ///
    /// Only non-empty strings are used: a missing, empty or non-string `vaishnavName`
    /// gets the fallback name, and the same for `bio` gives `""`.
    pub fn first_seen(id: &str, group_index: &str, source: &GroupedSource) -> Self {
        let name = non_empty_str(source.vaishnav_name.as_ref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} {}", FALLBACK_GROUP_NAME_PREFIX, group_index));
        let bio = non_empty_str(source.bio.as_ref()).unwrap_or_default().to_string();

        Self { id: id.to_string(), name, bio, prasangs: Vec::new() }
    }
}
