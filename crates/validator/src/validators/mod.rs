//! Built-in rules
//!
//! Every rule here has the [`RuleFn`](crate::foundation::RuleFn) signature
//! and is registered under the name given by its constant.
//!
//! # Categories
//!
//! - **Presence**: [`required`], [`nonzero`]
//! - **Geographic**: [`latitude`], [`longitude`]
//! - **Format**: [`uuid`], [`regexp`]
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::Value;
//! use fieldcheck_validator::validators::{latitude, required, uuid};
//!
//! let lat = Value::from("51.5074");
//! assert!(required(&lat, "").is_ok());
//! assert!(latitude(&lat, "").is_ok());
//! assert!(uuid(&lat, "").is_err());
//! ```

pub mod format;
pub mod geo;
pub mod presence;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use presence::{NONZERO, REQUIRED, nonzero, required};

pub use geo::{Axis, Coordinate, LATITUDE, LONGITUDE, coordinate, latitude, longitude};

pub use format::{
    MatchesRegex, REGEXP, UUID, UUID_PATTERN, Uuid, matches_pattern, matches_regex, regexp, uuid,
    uuid_format,
};
