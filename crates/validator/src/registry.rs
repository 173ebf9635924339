//! Rule registry
//!
//! Maps rule names to [`RuleFn`]s. A registry is assembled once through
//! [`RegistryBuilder`] and is read-only afterwards, so it can be shared
//! across threads behind an `Arc` without locking.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::{ValidationError, Value};
//! use fieldcheck_validator::registry::RuleRegistry;
//!
//! fn even(value: &Value, _param: &str) -> Result<(), ValidationError> {
//!     match value {
//!         Value::Int(n) if n % 2 == 0 => Ok(()),
//!         _ => Err(ValidationError::invalid("not even")),
//!     }
//! }
//!
//! let registry = RuleRegistry::builder()
//!     .with_builtins()
//!     .rule("even", even)
//!     .build();
//!
//! assert!(registry.apply("even", &Value::from(4_i32), "").is_ok());
//! assert!(registry.apply("latitude", &Value::from(12.0), "").is_ok());
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::foundation::{RuleFn, ValidationError, Value};
use crate::validators;

static DEFAULT_REGISTRY: LazyLock<Arc<RuleRegistry>> =
    LazyLock::new(|| Arc::new(RuleRegistry::builtin()));

/// Returns the shared registry holding the built-in rules.
#[must_use]
pub fn default_registry() -> Arc<RuleRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

// ============================================================================
// REGISTRY
// ============================================================================

/// An immutable table of named rules.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<Cow<'static, str>, RuleFn>,
}

impl RuleRegistry {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// A registry holding `required`, `nonzero`, `latitude`, `longitude`,
    /// `uuid` and `regexp`.
    #[must_use]
    pub fn builtin() -> Self {
        Self::builder().with_builtins().build()
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<RuleFn> {
        self.rules.get(name).copied()
    }

    /// Returns true if a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|name| -> &str { name })
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the rule registered under `name`.
    ///
    /// Fails with [`ErrorKind::UnknownRule`](crate::foundation::ErrorKind::UnknownRule)
    /// when no such rule exists.
    pub fn apply(&self, name: &str, value: &Value, param: &str) -> Result<(), ValidationError> {
        match self.get(name) {
            Some(rule) => rule(value, param),
            None => Err(ValidationError::unknown_rule(name.to_owned())),
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Assembles a [`RuleRegistry`].
///
/// Registering a name twice keeps the later rule, so custom rules can
/// replace built-ins.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    rules: HashMap<Cow<'static, str>, RuleFn>,
}

impl RegistryBuilder {
    /// Registers `rule` under `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, name: impl Into<Cow<'static, str>>, rule: RuleFn) -> Self {
        let name = name.into();
        if self.rules.insert(name.clone(), rule).is_some() {
            tracing::debug!(rule = %name, "replacing registered rule");
        }
        self
    }

    /// Registers the built-in rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_builtins(self) -> Self {
        self.rule(validators::REQUIRED, validators::required)
            .rule(validators::NONZERO, validators::nonzero)
            .rule(validators::LATITUDE, validators::latitude)
            .rule(validators::LONGITUDE, validators::longitude)
            .rule(validators::UUID, validators::uuid)
            .rule(validators::REGEXP, validators::regexp)
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> RuleRegistry {
        tracing::debug!(rules = self.rules.len(), "rule registry built");
        RuleRegistry { rules: self.rules }
    }
}

// ============================================================================
// TESTS
// ============================================================================
