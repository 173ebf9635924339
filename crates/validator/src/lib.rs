//! # fieldcheck-validator
//!
//! Named, tag-driven validation rules for record fields.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! struct Checkin {
//!     venue: Option<String>,
//!     lat: f64,
//!     lng: String,
//! }
//!
//! impl Annotated for Checkin {
//!     fn fields(&self) -> Vec<Field> {
//!         vec![
//!             Field::new("venue", "required,uuid", self.venue.clone()),
//!             Field::new("lat", "latitude", self.lat),
//!             Field::new("lng", "longitude", self.lng.as_str()),
//!         ]
//!     }
//! }
//!
//! let checkin = Checkin {
//!     venue: Some("550e8400-e29b-41d4-a716-446655440000".into()),
//!     lat: 48.8584,
//!     lng: "2.2945".into(),
//! };
//! assert!(RecordValidator::new().validate(&checkin).is_ok());
//! ```
//!
//! ## Rules
//!
//! Every rule is a plain [`RuleFn`](foundation::RuleFn): it takes a
//! [`Value`](foundation::Value) and the parameter written in the tag.
//!
//! - [`required`](validators::required): the value or reference exists
//! - [`nonzero`](validators::nonzero): the value is not its zero value
//! - [`latitude`](validators::latitude) / [`longitude`](validators::longitude):
//!   geographic ranges, floats or numeric strings
//! - [`uuid`](validators::uuid): canonical UUID text
//! - [`regexp`](validators::regexp): matches the pattern given as parameter
//!
//! Custom rules are added through [`RuleRegistry::builder`](registry::RuleRegistry::builder).
//!
//! ## Typed validators
//!
//! The [`validator!`] macro declares reusable [`Validate`](foundation::Validate)
//! implementations; [`Coordinate`](validators::Coordinate) and
//! [`Uuid`](validators::Uuid) are built with it.

// ValidationError is the error type of every rule; boxing it would add an
// allocation to each failing check.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod foundation;
#[cfg(feature = "serde")]
pub mod json;
mod macros;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod validators;
