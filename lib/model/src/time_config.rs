//! Inputs to availability resolution.
//!
//! A [`ConferenceTimeConfig`] is built once per evaluation from the
//! configuration store plus the deployment's forced-open flag, and is
//! never mutated afterwards.

use crate::error::ConferenceError;
use crate::keys;
use crate::store::ConfigStore;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{instrument, warn};
use voc_streaming_core::Result;

/// Explicit status override set by an operator (`CONFERENCE.CLOSED`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClosedOverride {
    /// No override configured.
    #[default]
    Unset,
    /// Old schemas stored a plain boolean and had no "before" phase.
    LegacyBoolean(bool),
    /// Conference has not started yet.
    Before,
    /// Conference is running.
    Running,
    /// Conference is over.
    After,
    /// A value that matches none of the above. Evaluation ignores it and
    /// falls through to the configured timestamps.
    Unrecognized(String),
}

impl ClosedOverride {
    /// Interprets a raw configuration value.
    ///
    /// Only the exact lowercase strings `before`, `running` and `after` are
    /// recognized; anything else that is not a boolean or null becomes
    /// [`ClosedOverride::Unrecognized`].
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Unset,
            Value::Bool(closed) => Self::LegacyBoolean(*closed),
            Value::String(phase) => match phase.as_str() {
                "before" => Self::Before,
                "running" => Self::Running,
                "after" => Self::After,
                _ => Self::Unrecognized(phase.clone()),
            },
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// Everything the resolver needs to decide whether a conference is running.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConferenceTimeConfig {
    forced_open: bool,
    closed: ClosedOverride,
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
}

impl ConferenceTimeConfig {
    /// Creates a configuration without start or end boundaries.
    #[must_use]
    pub fn new(forced_open: bool, closed: ClosedOverride) -> Self {
        Self {
            forced_open,
            closed,
            starts_at: None,
            ends_at: None,
        }
    }

    /// Sets the start boundary.
    #[must_use]
    pub fn with_starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    /// Sets the end boundary.
    #[must_use]
    pub fn with_ends_at(mut self, ends_at: DateTime<Utc>) -> Self {
        self.ends_at = Some(ends_at);
        self
    }

    /// Reads the override and boundaries from a configuration store.
    ///
    /// `forced_open` comes from the deployment, not from the conference's
    /// own configuration tree.
    ///
    /// # Errors
    ///
    /// Returns an error if a boundary is not an integer Unix timestamp or
    /// lies outside the representable range.
    #[instrument(skip(store))]
    pub fn from_store<S: ConfigStore>(
        store: &S,
        forced_open: bool,
    ) -> Result<Self, ConferenceError> {
        let closed = store
            .get::<Value>(keys::CLOSED)
            .map_err(ConferenceError::from)?
            .map(|raw| ClosedOverride::from_value(&raw))
            .unwrap_or_default();

        if let ClosedOverride::Unrecognized(raw) = &closed {
            warn!(
                key = keys::CLOSED,
                value = %raw,
                "unrecognized closed override, falling back to timestamps"
            );
        }

        Ok(Self {
            forced_open,
            closed,
            starts_at: read_timestamp(store, keys::STARTS_AT)?,
            ends_at: read_timestamp(store, keys::ENDS_AT)?,
        })
    }

    /// Returns true if the deployment forces every conference open.
    #[must_use]
    pub fn forced_open(&self) -> bool {
        self.forced_open
    }

    /// Returns the operator override.
    #[must_use]
    pub fn closed(&self) -> &ClosedOverride {
        &self.closed
    }

    /// Returns the configured start, if any.
    #[must_use]
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        self.starts_at
    }

    /// Returns the configured end, if any.
    #[must_use]
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.ends_at
    }
}

fn read_timestamp<S: ConfigStore>(
    store: &S,
    key: &str,
) -> Result<Option<DateTime<Utc>>, ConferenceError> {
    let invalid = |reason: String| ConferenceError::InvalidTimestamp {
        key: key.to_string(),
        reason,
    };

    let Some(raw) = store
        .get::<Value>(key)
        .map_err(|e| invalid(e.to_string()))?
    else {
        return Ok(None);
    };

    let seconds = match &raw {
        Value::Number(number) => number.as_i64().ok_or_else(|| {
            if number.is_u64() {
                invalid(format!("{number} is out of range"))
            } else {
                invalid(format!("{number} is not a whole number of seconds"))
            }
        })?,
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(format!("{text:?} is not an integer")))?,
        other => return Err(invalid(format!("{other} is not an integer")).into()),
    };

    let instant = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| invalid(format!("{seconds} is out of range")))?;
    Ok(Some(instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};
    use serde_json::json;

    fn store(toml: &str) -> Config {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .expect("build config")
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).expect("valid timestamp")
    }

    #[test]
    fn closed_override_from_phase_strings() {
        assert_eq!(ClosedOverride::from_value(&json!("before")), ClosedOverride::Before);
        assert_eq!(ClosedOverride::from_value(&json!("running")), ClosedOverride::Running);
        assert_eq!(ClosedOverride::from_value(&json!("after")), ClosedOverride::After);
    }

    #[test]
    fn closed_override_from_legacy_booleans() {
        assert_eq!(
            ClosedOverride::from_value(&json!(true)),
            ClosedOverride::LegacyBoolean(true)
        );
        assert_eq!(
            ClosedOverride::from_value(&json!(false)),
            ClosedOverride::LegacyBoolean(false)
        );
    }

    #[test]
    fn closed_override_keeps_unrecognized_values() {
        assert_eq!(
            ClosedOverride::from_value(&json!("runing")),
            ClosedOverride::Unrecognized("runing".to_string())
        );
        assert_eq!(
            ClosedOverride::from_value(&json!("After")),
            ClosedOverride::Unrecognized("After".to_string())
        );
        assert_eq!(
            ClosedOverride::from_value(&json!(0)),
            ClosedOverride::Unrecognized("0".to_string())
        );
    }

    #[test]
    fn closed_override_null_is_unset() {
        assert_eq!(ClosedOverride::from_value(&Value::Null), ClosedOverride::Unset);
    }

    #[test]
    fn from_store_reads_all_fields() {
        let config = store(
            r#"
            [conference]
            closed = "running"
            starts_at = 1000
            ends_at = 2000
            "#,
        );

        let time = ConferenceTimeConfig::from_store(&config, false).expect("load");
        assert!(!time.forced_open());
        assert_eq!(time.closed(), &ClosedOverride::Running);
        assert_eq!(time.starts_at(), Some(at(1000)));
        assert_eq!(time.ends_at(), Some(at(2000)));
    }

    #[test]
    fn from_store_with_empty_config() {
        let config = store("");
        let time = ConferenceTimeConfig::from_store(&config, true).expect("load");
        assert_eq!(time, ConferenceTimeConfig::new(true, ClosedOverride::Unset));
    }

    #[test]
    fn from_store_reads_legacy_boolean() {
        let config = store("[conference]\nclosed = false\n");
        let time = ConferenceTimeConfig::from_store(&config, false).expect("load");
        assert_eq!(time.closed(), &ClosedOverride::LegacyBoolean(false));
    }

    #[test]
    fn from_store_accepts_numeric_string_timestamps() {
        let config = store("[conference]\nstarts_at = \"1000\"\n");
        let time = ConferenceTimeConfig::from_store(&config, false).expect("load");
        assert_eq!(time.starts_at(), Some(at(1000)));
    }

    #[test]
    fn from_store_rejects_malformed_timestamp() {
        let config = store("[conference]\nends_at = \"next tuesday\"\n");
        let result = ConferenceTimeConfig::from_store(&config, false);
        assert!(result.is_err());
    }

    #[test]
    fn from_store_rejects_fractional_timestamp() {
        let config = store("[conference]\nstarts_at = 1000.7\n");
        let err = ConferenceTimeConfig::from_store(&config, false).unwrap_err();
        assert!(matches!(
            err.current_context(),
            ConferenceError::InvalidTimestamp { key, .. } if key == keys::STARTS_AT
        ));
    }

    #[test]
    fn from_store_rejects_fractional_string_timestamp() {
        let config = store("[conference]\nends_at = \"2000.5\"\n");
        assert!(ConferenceTimeConfig::from_store(&config, false).is_err());
    }

    #[test]
    fn from_store_reads_uppercase_closed() {
        let config = store("[CONFERENCE]\nCLOSED = \"after\"\n");
        let time = ConferenceTimeConfig::from_store(&config, false).expect("load");
        assert_eq!(time.closed(), &ClosedOverride::After);
    }

    #[test]
    fn from_store_reads_uppercase_legacy_boolean() {
        let config = store("[CONFERENCE]\nCLOSED = true\n");
        let time = ConferenceTimeConfig::from_store(&config, false).expect("load");
        assert_eq!(time.closed(), &ClosedOverride::LegacyBoolean(true));
    }

    #[test]
    fn from_store_reads_uppercase_starts_at() {
        let config = store("[CONFERENCE]\nSTARTS_AT = 1000\n");
        let time = ConferenceTimeConfig::from_store(&config, false).expect("load");
        assert_eq!(time.starts_at(), Some(at(1000)));
        assert_eq!(time.ends_at(), None);
    }

    #[test]
    fn from_store_reads_uppercase_ends_at() {
        let config = store("[CONFERENCE]\nENDS_AT = 2000\n");
        let time = ConferenceTimeConfig::from_store(&config, false).expect("load");
        assert_eq!(time.ends_at(), Some(at(2000)));
        assert_eq!(time.starts_at(), None);
    }

    #[test]
    fn from_store_rejects_out_of_range_timestamp() {
        let config = store(&format!("[conference]\nstarts_at = {}\n", i64::MAX));
        let result = ConferenceTimeConfig::from_store(&config, false);
        assert!(result.is_err());
    }

    #[test]
    fn builder_sets_boundaries() {
        let time = ConferenceTimeConfig::new(false, ClosedOverride::After)
            .with_starts_at(at(10))
            .with_ends_at(at(20));
        assert_eq!(time.starts_at(), Some(at(10)));
        assert_eq!(time.ends_at(), Some(at(20)));
        assert_eq!(time.closed(), &ClosedOverride::After);
    }
}
