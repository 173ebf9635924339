//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the value model, the driver, the registry and the built-in rules.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! assert!(check(&Value::from("12.5"), "required,latitude").is_ok());
//! assert!(uuid(&Value::from("nope"), "").is_err());
//! ```

// ============================================================================
// FOUNDATION: Values, traits, errors
// ============================================================================

pub use crate::foundation::{
    ErrorKind, Kind, Pointee, RuleFn, Validate, ValidationError, ValidationErrors, Value,
};

// ============================================================================
// DRIVER: Records, registry, config
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::record::{Annotated, Field, RecordValidator, RuleCall, check, parse_tag, validate};
pub use crate::registry::{RegistryBuilder, RuleRegistry, default_registry};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// SERDE-GATED: JSON bridge
// ============================================================================

#[cfg(feature = "serde")]
pub use crate::json::JsonRecord;
