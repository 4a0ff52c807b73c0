use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Envelope wrapping every resource sent to or received from the API
///
/// ```
/// use epcc_client::application::models::Data;
///
/// let wrapped = Data::new(vec![1, 2, 3]);
/// assert_eq!(serde_json::to_string(&wrapped).unwrap(), r#"{"data":[1,2,3]}"#);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Data<T> {
    /// Wrapped resource or list of resources
    pub data: T,
}

impl<T> Data<T> {
    /// Wraps a resource
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Unwraps the resource
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Links attached to a resource
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Links {
    /// Canonical URL of the resource
    #[serde(rename = "self", default)]
    pub self_link: String,
}

/// Creation and update times of a resource
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Timestamps {
    /// When the resource was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the resource was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reference to a related resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Relationship {
    /// Type of the related resource
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub type_: String,
    /// Identifier of the related resource
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl Relationship {
    /// Creates a reference to a resource of the given type
    pub fn new(type_: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            id: id.into(),
        }
    }
}

/// To-many relationship
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RelationshipItems {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Relationship>,
}

/// To-one relationship
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RelationshipItem {
    #[serde(default)]
    pub data: Relationship,
}
