//! Core traits for the validation system
//!
//! Two contracts live here:
//!
//! - [`Validate`]: a typed check over an already-normalized input
//!   (`f64`, `str`). Built with the [`validator!`](crate::validator) macro.
//! - [`RuleFn`]: the uniform rule signature the registry and the record
//!   driver dispatch through. A rule lowers a [`Value`] into the input its
//!   typed validator expects, then delegates.

use crate::foundation::{ValidationError, Value};

// ============================================================================
// TYPED VALIDATOR TRAIT
// ============================================================================

/// A typed check over a normalized input.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Validate, ValidationError};
///
/// struct NonNegative;
///
/// impl Validate for NonNegative {
///     type Input = f64;
///
///     fn validate(&self, input: &f64) -> Result<(), ValidationError> {
///         if *input >= 0.0 {
///             Ok(())
///         } else {
///             Err(ValidationError::invalid(format!("{input} is negative")))
///         }
///     }
/// }
///
/// assert!(NonNegative.validate(&1.0).is_ok());
/// assert!(NonNegative.validate(&-1.0).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// RULE SIGNATURE
// ============================================================================

/// The signature every named rule satisfies.
///
/// Takes the field value and the rule parameter from the tag (`""` when the
/// tag gives none) and returns `Ok(())` when the value is valid. Rules are
/// plain functions: stateless, `Send + Sync`, and safe to call concurrently.
pub type RuleFn = fn(&Value, &str) -> Result<(), ValidationError>;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
