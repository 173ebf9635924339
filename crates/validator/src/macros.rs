//! Macros for creating typed validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::validator;
//! use fieldcheck_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     #[derive(Copy, PartialEq)]
//!     pub AtMost { max: f64 } for f64;
//!     rule(self, input) { *input <= self.max }
//!     error(self, input) { ValidationError::invalid(format!("{input} exceeds {}", self.max)) }
//!     fn at_most(max: f64);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a typed validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq)]
///     pub AtLeast { min: f64 } for f64;
///     rule(self, input) { *input >= self.min }
///     error(self, input) { ValidationError::invalid("too small") }
///     fn at_least(min: f64);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Hex { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::invalid("not hex") }
///     new() { Self { pattern: HEX_REGEX.clone() } }
///     fn hex();
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub Pattern { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::invalid("no match") }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn pattern(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // Shared struct definition.
    (@struct $(#[$meta:meta])* $vis:vis $name:ident { $($field:ident: $fty:ty),+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }
    };

    // Shared `Validate` impl: `rule` decides, `error` builds the failure.
    (
        @validate $name:ident for $input:ty;
        ($self_:ident, $inp:ident) $rule:block ($einp:ident) $err:block
    ) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }
    };

    // Fallible `new`; the factory, if any, forwards the error.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;)?
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });
        $crate::validator!(@validate $name for $input; ($self_, $inp) $rule ($einp) $err);

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $(
            $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
                $name::new($($farg),*)
            }
        )?
    };

    // Custom infallible `new`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });
        $crate::validator!(@validate $name for $input; ($self_, $inp) $rule ($einp) $err);

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };

    // `new` taking every field in order.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });
        $crate::validator!(@validate $name for $input; ($self_, $inp) $rule ($einp) $err);

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };
}

// ============================================================================
// TESTS
// ============================================================================
