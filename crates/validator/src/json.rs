//! JSON bridge
//!
//! Lowers `serde_json::Value` documents into [`Value`] so JSON payloads can
//! be checked with the same rules and tags as Rust records.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::json::JsonRecord;
//! use fieldcheck_validator::record::RecordValidator;
//! use serde_json::json;
//!
//! let payload = json!({ "id": "550e8400-e29b-41d4-a716-446655440000", "lat": 91.0 });
//! let record = JsonRecord::new(&payload)
//!     .field("id", "required,uuid")
//!     .field("lat", "latitude")
//!     .field("lng", "required,longitude");
//!
//! let errors = RecordValidator::new().validate(&record).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.errors()[0].field.as_deref(), Some("lat"));
//! assert_eq!(errors.errors()[1].field.as_deref(), Some("lng"));
//! ```

use std::borrow::Cow;

use crate::foundation::Value;
use crate::record::{Annotated, Field};

impl From<&serde_json::Value> for Value {
    /// JSON `null` is an empty dynamic slot: `required` rejects it and value
    /// rules skip it. Every number becomes a [`Value::Float`].
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Dyn(None),
            serde_json::Value::Bool(b) => Self::Bool(*b),
            // JSON has one number type; `1` and `1.0` are the same value.
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Absent, Self::Float),
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Array(items) => Self::Seq(items.iter().map(Self::from).collect()),
            serde_json::Value::Object(entries) => Self::Record(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Self::from(&json)
    }
}

/// A JSON object paired with the tags to check its keys against.
///
/// Keys missing from the object are reported as [`Value::Absent`]. A
/// document that is not an object has every field absent.
#[derive(Debug, Clone)]
pub struct JsonRecord<'a> {
    document: &'a serde_json::Value,
    fields: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl<'a> JsonRecord<'a> {
    /// Wraps a JSON document with no tagged fields yet.
    #[must_use]
    pub fn new(document: &'a serde_json::Value) -> Self {
        Self {
            document,
            fields: Vec::new(),
        }
    }

    /// Tags the key `name`. Fields are checked in the order they are added.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(
        mut self,
        name: impl Into<Cow<'static, str>>,
        tag: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.fields.push((name.into(), tag.into()));
        self
    }
}

impl Annotated for JsonRecord<'_> {
    fn fields(&self) -> Vec<Field> {
        self.fields
            .iter()
            .map(|(name, tag)| Field {
                name: name.clone(),
                tag: tag.clone(),
                value: self
                    .document
                    .get(name.as_ref())
                    .map_or(Value::Absent, Value::from),
            })
            .collect()
    }
}
