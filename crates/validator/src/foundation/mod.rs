//! Foundation types and traits
//!
//! - **Values**: [`Value`], [`Kind`], [`Pointee`]: the closed set of runtime
//!   shapes a rule can receive
//! - **Traits**: [`Validate`] for typed checks, [`RuleFn`] for named rules
//! - **Errors**: [`ErrorKind`], [`ValidationError`], [`ValidationErrors`]
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::{ErrorKind, Kind, Value};
//! use fieldcheck_validator::validators::required;
//!
//! assert!(required(&Value::from(0_i32), "").is_ok());
//!
//! let err = required(&Value::null(Kind::Int), "").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Required);
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ErrorKind, ValidationError, ValidationErrors};
pub use traits::{RuleFn, Validate, ValidationResult};
pub use value::{HasKind, Kind, Pointee, Value};

/// Common imports for working with the foundation.
pub mod prelude {
    pub use super::{
        ErrorKind, Kind, Pointee, RuleFn, Validate, ValidationError, ValidationErrors,
        ValidationResult, Value,
    };
}
