//! Presence rules
//!
//! - [`required`]: the value or reference exists. Zero values count as present.
//! - [`nonzero`]: the value is not its type's zero value.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::{ErrorKind, Kind, Value};
//! use fieldcheck_validator::validators::{nonzero, required};
//!
//! // An empty string is present...
//! assert!(required(&Value::from(""), "").is_ok());
//! // ...but zero.
//! assert_eq!(nonzero(&Value::from(""), "").unwrap_err().kind, ErrorKind::Zero);
//!
//! // A null reference is missing.
//! assert_eq!(
//!     required(&Value::null(Kind::String), "").unwrap_err().kind,
//!     ErrorKind::Required,
//! );
//! ```

use crate::foundation::{ValidationError, Value};

/// Rule name of [`required`].
pub const REQUIRED: &str = "required";

/// Rule name of [`nonzero`].
pub const NONZERO: &str = "nonzero";

/// Checks that a value is present.
///
/// Nullable references pass iff they are non-null, whatever they point to.
/// Concrete scalars, strings, collections and records always pass, even when
/// they hold a zero value. `Absent` and an empty dynamic slot fail with
/// [`ErrorKind::Required`](crate::foundation::ErrorKind::Required).
/// Functions, channels and complex numbers are
/// [`ErrorKind::Unsupported`](crate::foundation::ErrorKind::Unsupported).
///
/// `param` is ignored.
pub fn required(value: &Value, param: &str) -> Result<(), ValidationError> {
    let present = match value {
        Value::Ref { target, .. } => target.is_some(),
        Value::Dyn(Some(inner)) => return required(inner, param),
        Value::Dyn(None) | Value::Absent => false,
        Value::Bool(_)
        | Value::Int(_)
        | Value::Uint(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Seq(_)
        | Value::Array(_)
        | Value::Map(_)
        | Value::Record(_) => true,
        Value::Complex { .. } | Value::Func | Value::Chan => {
            return Err(ValidationError::unsupported(REQUIRED, value.kind()));
        }
    };

    if present {
        Ok(())
    } else {
        Err(ValidationError::required())
    }
}

/// Checks that a value is not its type's zero value.
///
/// Fails with [`ErrorKind::Zero`](crate::foundation::ErrorKind::Zero) for
/// `""`, `0`, `0.0`, `false`, `0+0i`, empty sequences, arrays and maps, null
/// references, empty dynamic slots and `Absent`. Records and non-null
/// references pass. Functions and channels are unsupported.
pub fn nonzero(value: &Value, param: &str) -> Result<(), ValidationError> {
    let nonzero = match value {
        Value::Absent | Value::Dyn(None) => false,
        Value::Dyn(Some(inner)) => return nonzero(inner, param),
        Value::Ref { target, .. } => target.is_some(),
        Value::Bool(b) => *b,
        Value::Int(n) => *n != 0,
        Value::Uint(n) => *n != 0,
        Value::Float(f) => *f != 0.0,
        Value::Complex { re, im } => *re != 0.0 || *im != 0.0,
        Value::String(s) => !s.is_empty(),
        Value::Seq(items) | Value::Array(items) => !items.is_empty(),
        Value::Map(entries) => !entries.is_empty(),
        Value::Record(_) => true,
        Value::Func | Value::Chan => {
            return Err(ValidationError::unsupported(NONZERO, value.kind()));
        }
    };

    if nonzero {
        Ok(())
    } else {
        Err(ValidationError::zero())
    }
}
