//! Error types for validation failures
//!
//! Every rule reports through [`ValidationError`]. Its [`ErrorKind`] is the
//! closed set of outcomes callers switch on; the message, field and params
//! carry the value-specific detail.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static messages.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::Kind;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The category of a validation error.
///
/// `Required`, `Zero` and `Invalid` are violations: the value was evaluated
/// and fails the rule. The remaining kinds signal a usage error: the rule was
/// attached to a field it cannot evaluate, or the rule itself is misconfigured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// A required value or reference is missing.
    #[error("value is required")]
    Required,
    /// A value holds its type's zero value.
    #[error("value must not be zero")]
    Zero,
    /// A value was evaluated and does not satisfy the rule.
    #[error("invalid value")]
    Invalid,
    /// The rule cannot be applied to the value's shape.
    #[error("unsupported type")]
    Unsupported,
    /// No rule is registered under the requested name.
    #[error("unknown rule")]
    UnknownRule,
    /// The rule parameter or tag is malformed.
    #[error("bad parameter")]
    BadParameter,
}

impl ErrorKind {
    /// Stable code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Zero => "zero",
            Self::Invalid => "invalid",
            Self::Unsupported => "unsupported",
            Self::UnknownRule => "unknown_rule",
            Self::BadParameter => "bad_parameter",
        }
    }

    /// Returns true when the value itself fails the rule.
    #[must_use]
    pub const fn is_violation(self) -> bool {
        matches!(self, Self::Required | Self::Zero | Self::Invalid)
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::invalid("91 is not a valid latitude")
///     .with_field("lat")
///     .with_param("value", "91");
///
/// assert_eq!(error.kind, ErrorKind::Invalid);
/// assert_eq!(error.param("value"), Some("91"));
/// assert_eq!(error.to_string(), "[lat] invalid: 91 is not a valid latitude (params: [value=91])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What went wrong, as a closed category.
    pub kind: ErrorKind,

    /// Human-readable message. Value-specific for `Invalid` errors.
    pub message: Cow<'static, str>,

    /// Field the error belongs to, set by the record driver.
    pub field: Option<Cow<'static, str>>,

    /// Rule that produced the error, set by the record driver.
    pub rule: Option<Cow<'static, str>>,

    /// Ordered key-value detail (typically 0-3 entries).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            rule: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the rule name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: impl Into<Cow<'static, str>>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error is of the given kind.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Returns true when the value itself fails the rule.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        self.kind.is_violation()
    }

    /// Converts the error to a JSON value for reporting.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.kind.code(),
            "message": self.message,
            "field": self.field,
            "rule": self.rule,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.kind.code(), self.message)?;
        } else {
            write!(f, "{}: {}", self.kind.code(), self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ErrorKind> for ValidationError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, kind.to_string())
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    #[must_use]
    pub fn required() -> Self {
        Self::new(ErrorKind::Required, "value is required")
    }

    /// Creates a "zero" error.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(ErrorKind::Zero, "value must not be zero")
    }

    /// Creates an "invalid" error with a value-specific message.
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Invalid, message)
    }

    /// Creates an "unsupported" error for a rule applied to the wrong shape.
    pub fn unsupported(rule: impl Into<Cow<'static, str>>, kind: Kind) -> Self {
        let rule = rule.into();
        Self::new(
            ErrorKind::Unsupported,
            format!("rule '{rule}' does not apply to {kind} values"),
        )
        .with_param("kind", kind.as_str())
        .with_rule(rule)
    }

    /// Creates an "unknown_rule" error.
    pub fn unknown_rule(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        Self::new(ErrorKind::UnknownRule, format!("no rule named '{name}'")).with_rule(name)
    }

    /// Creates a "bad_parameter" error.
    pub fn bad_parameter(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadParameter, message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the errors recorded against one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
    }

    /// Returns true if any error is a usage error rather than a violation.
    #[must_use]
    pub fn has_usage_errors(&self) -> bool {
        self.errors.iter().any(|e| !e.is_violation())
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
