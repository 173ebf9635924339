//! Record validation settings

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How [`RecordValidator`](crate::record::RecordValidator) walks a record.
///
/// Missing keys fall back to the defaults when deserialized:
///
/// ```
/// # #[cfg(feature = "serde")] {
/// use fieldcheck_validator::config::ValidatorConfig;
///
/// let config: ValidatorConfig = serde_json::from_str(r#"{ "fail_fast": true }"#).unwrap();
/// assert!(config.fail_fast);
/// assert!(!config.ignore_unknown_rules);
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidatorConfig {
    /// Stop at the first error instead of collecting every error.
    pub fail_fast: bool,

    /// Skip rule names missing from the registry instead of reporting
    /// [`ErrorKind::UnknownRule`](crate::foundation::ErrorKind::UnknownRule).
    pub ignore_unknown_rules: bool,
}

impl ValidatorConfig {
    /// Sets [`fail_fast`](Self::fail_fast).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Sets [`ignore_unknown_rules`](Self::ignore_unknown_rules).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_ignore_unknown_rules(mut self, ignore: bool) -> Self {
        self.ignore_unknown_rules = ignore;
        self
    }
}
