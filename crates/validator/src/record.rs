//! Tag-driven record validation
//!
//! A record lists its fields through [`Annotated`]; each [`Field`] carries a
//! tag such as `"required,latitude"` naming the rules to run against its
//! value. [`RecordValidator`] parses the tags, looks the rules up in a
//! [`RuleRegistry`] and collects the failures.
//!
//! # Tag syntax
//!
//! - rules are separated by commas: `required,uuid`
//! - a rule takes a parameter after `=`: `regexp=^[a-z]+$`
//! - `\,` is a literal comma inside a parameter: `regexp=^a\,b$`
//! - an empty tag or `-` runs no rules
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::ErrorKind;
//! use fieldcheck_validator::record::{Annotated, Field, RecordValidator};
//!
//! struct Place {
//!     id: String,
//!     lat: Option<f64>,
//!     lng: f64,
//! }
//!
//! impl Annotated for Place {
//!     fn fields(&self) -> Vec<Field> {
//!         vec![
//!             Field::new("id", "uuid", self.id.as_str()),
//!             Field::new("lat", "required,latitude", self.lat),
//!             Field::new("lng", "longitude", self.lng),
//!         ]
//!     }
//! }
//!
//! let place = Place {
//!     id: "550e8400-e29b-41d4-a716-446655440000".into(),
//!     lat: None,
//!     lng: 200.0,
//! };
//!
//! let errors = RecordValidator::new().validate(&place).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.for_field("lat").next().unwrap().kind, ErrorKind::Required);
//! assert_eq!(errors.for_field("lng").next().unwrap().kind, ErrorKind::Invalid);
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::config::ValidatorConfig;
use crate::foundation::{ValidationError, ValidationErrors, Value};
use crate::registry::{RuleRegistry, default_registry};

// ============================================================================
// TAGS
// ============================================================================

/// One rule invocation parsed from a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCall {
    /// Registered rule name.
    pub name: String,
    /// Rule parameter, `""` when the tag gives none.
    pub param: String,
}

/// Parses a tag into its rule calls.
///
/// ```
/// use fieldcheck_validator::record::parse_tag;
///
/// let calls = parse_tag(r"required,regexp=^a\,b$").unwrap();
/// assert_eq!(calls[0].name, "required");
/// assert_eq!(calls[1].param, "^a,b$");
/// ```
pub fn parse_tag(tag: &str) -> Result<Vec<RuleCall>, ValidationError> {
    let trimmed = tag.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(Vec::new());
    }

    split_unescaped(trimmed)
        .into_iter()
        .map(|segment| {
            let (name, param) = segment.split_once('=').unwrap_or((segment.as_str(), ""));
            let name = name.trim();
            if name.is_empty() {
                return Err(
                    ValidationError::bad_parameter(format!("empty rule name in tag '{tag}'"))
                        .with_param("tag", tag.to_owned()),
                );
            }
            Ok(RuleCall {
                name: name.to_owned(),
                param: param.to_owned(),
            })
        })
        .collect()
}

/// Splits on commas not preceded by a backslash. Other escapes are kept
/// verbatim so regex parameters survive.
fn split_unescaped(tag: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = tag.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(',') => current.push(','),
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
                None => current.push('\\'),
            },
            ',' => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);
    segments
}

// ============================================================================
// RECORDS
// ============================================================================

/// A record field: its name, its tag and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: Cow<'static, str>,
    pub tag: Cow<'static, str>,
    pub value: Value,
}

impl Field {
    /// Creates a field.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        tag: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// A record whose fields carry validation tags.
pub trait Annotated {
    /// Lists the fields to validate, in order.
    fn fields(&self) -> Vec<Field>;
}

impl Annotated for [Field] {
    fn fields(&self) -> Vec<Field> {
        self.to_vec()
    }
}

impl Annotated for Vec<Field> {
    fn fields(&self) -> Vec<Field> {
        self.clone()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Runs tagged rules against values and records.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    registry: Arc<RuleRegistry>,
    config: ValidatorConfig,
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordValidator {
    /// A validator over the built-in rules with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(default_registry())
    }

    /// A validator over a custom registry.
    #[must_use]
    pub fn with_registry(registry: Arc<RuleRegistry>) -> Self {
        Self {
            registry,
            config: ValidatorConfig::default(),
        }
    }

    /// Replaces the config.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the config.
    #[must_use]
    pub fn config(&self) -> ValidatorConfig {
        self.config
    }

    /// Returns the registry rules are looked up in.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Runs every rule in `tag` against one value.
    pub fn check(&self, value: &Value, tag: &str) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.check_into(None, value, tag, &mut errors);
        errors.into_result(())
    }

    /// Runs every field's tag against its value.
    ///
    /// Errors carry the field and rule names. With
    /// [`fail_fast`](ValidatorConfig::fail_fast) set, stops at the first one.
    pub fn validate<T: Annotated + ?Sized>(&self, record: &T) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in record.fields() {
            self.check_into(Some(&field.name), &field.value, &field.tag, &mut errors);
            if self.config.fail_fast && errors.has_errors() {
                break;
            }
        }

        errors.into_result(())
    }

    fn check_into(
        &self,
        field: Option<&Cow<'static, str>>,
        value: &Value,
        tag: &str,
        errors: &mut ValidationErrors,
    ) {
        let attach = |error: ValidationError| match field {
            Some(name) => error.with_field(name.clone()),
            None => error,
        };
        let field_name = field.map_or("", |name| &**name);

        let calls = match parse_tag(tag) {
            Ok(calls) => calls,
            Err(error) => {
                tracing::debug!(field = field_name, tag, "malformed tag");
                errors.add(attach(error));
                return;
            }
        };

        for call in calls {
            let Some(rule) = self.registry.get(&call.name) else {
                if self.config.ignore_unknown_rules {
                    tracing::warn!(field = field_name, rule = %call.name, "ignoring unknown rule");
                    continue;
                }
                errors.add(attach(ValidationError::unknown_rule(call.name)));
                if self.config.fail_fast {
                    return;
                }
                continue;
            };

            tracing::trace!(field = field_name, rule = %call.name, "evaluating rule");
            if let Err(error) = rule(value, &call.param) {
                tracing::debug!(field = field_name, rule = %call.name, %error, "rule failed");
                errors.add(attach(error.with_rule(call.name)));
                if self.config.fail_fast {
                    return;
                }
            }
        }
    }
}

/// Runs `tag` against one value with the built-in rules.
pub fn check(value: &Value, tag: &str) -> Result<(), ValidationErrors> {
    RecordValidator::new().check(value, tag)
}

/// Validates a record with the built-in rules.
pub fn validate<T: Annotated + ?Sized>(record: &T) -> Result<(), ValidationErrors> {
    RecordValidator::new().validate(record)
}

// ============================================================================
// TESTS
// ============================================================================
