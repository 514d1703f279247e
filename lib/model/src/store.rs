//! Key-value access to the hierarchical conference configuration.
//!
//! The model never parses configuration files itself. It only asks a
//! [`ConfigStore`] whether a dotted path exists and what it holds.
//! `config::Config` is the production implementation.

use crate::error::StoreError;
use config::{Config, ConfigError, Value, ValueKind};
use serde::de::DeserializeOwned;

/// Lookup interface over a hierarchical configuration tree.
///
/// Keys are dotted paths such as `CONFERENCE.STARTS_AT`. A key holding a
/// null value is treated as absent.
pub trait ConfigStore {
    /// Returns true if the key exists and is not null.
    fn has(&self, key: &str) -> bool;

    /// Looks up a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key exists but cannot be converted to `T`.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>;

    /// Returns the keys of the table at `key`, in configuration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the key exists but is not a table.
    fn child_keys(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Looks up a typed value, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the key exists but cannot be converted to `T`.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, StoreError> {
        Ok(self.get(key)?.unwrap_or(default))
    }
}

impl<S: ConfigStore> ConfigStore for &S {
    fn has(&self, key: &str) -> bool {
        (**self).has(key)
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        (**self).get(key)
    }

    fn child_keys(&self, key: &str) -> Result<Vec<String>, StoreError> {
        (**self).child_keys(key)
    }
}

impl ConfigStore for Config {
    fn has(&self, key: &str) -> bool {
        let Some(path) = resolve_path(self, key) else {
            return false;
        };
        match Config::get::<Value>(self, &path) {
            Ok(value) => !matches!(value.kind, ValueKind::Nil),
            Err(_) => false,
        }
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(path) = resolve_path(self, key) else {
            return Ok(None);
        };
        if !ConfigStore::has(self, &path) {
            return Ok(None);
        }
        match Config::get::<T>(self, &path) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::NotFound(_)) => Ok(None),
            Err(e) => Err(StoreError::InvalidValue {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn child_keys(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let Some(path) = resolve_path(self, key) else {
            return Ok(Vec::new());
        };
        match self.get_table(&path) {
            Ok(table) => Ok(table.keys().cloned().collect()),
            Err(ConfigError::NotFound(_)) => Ok(Vec::new()),
            Err(_) => Err(StoreError::NotATable {
                key: key.to_string(),
            }),
        }
    }
}

/// Finds the stored spelling of a dotted path.
///
/// File sources keep keys exactly as written while environment sources
/// lowercase them, so `CONFERENCE.CLOSED` and `conference.closed` must
/// address the same entry. An exact match wins over a case-insensitive one
/// at every segment.
fn resolve_path(config: &Config, key: &str) -> Option<String> {
    if Config::get::<Value>(config, key).is_ok() {
        return Some(key.to_string());
    }

    let mut node = config.clone().try_deserialize::<Value>().ok()?;
    let mut path = Vec::new();
    for segment in key.split('.') {
        let table = node.into_table().ok()?;
        let name = table
            .keys()
            .find(|name| name.as_str() == segment)
            .or_else(|| table.keys().find(|name| name.eq_ignore_ascii_case(segment)))?
            .clone();
        node = table.into_iter().find(|(candidate, _)| *candidate == name)?.1;
        path.push(name);
    }
    Some(path.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn store(toml: &str) -> Config {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .expect("build config")
    }

    #[test]
    fn has_reports_present_keys() {
        let config = store(
            r#"
            [conference]
            title = "36C3"
            "#,
        );

        assert!(ConfigStore::has(&config, "conference.title"));
        assert!(ConfigStore::has(&config, "conference"));
        assert!(!ConfigStore::has(&config, "conference.author"));
        assert!(!ConfigStore::has(&config, "rooms"));
    }

    #[test]
    fn get_returns_typed_values() {
        let config = store(
            r#"
            [conference]
            title = "36C3"
            starts_at = 1577268000
            closed = true
            "#,
        );

        let title: Option<String> = ConfigStore::get(&config, "conference.title").expect("lookup");
        assert_eq!(title.as_deref(), Some("36C3"));

        let starts: Option<i64> = ConfigStore::get(&config, "conference.starts_at").expect("lookup");
        assert_eq!(starts, Some(1_577_268_000));

        let closed: Option<bool> = ConfigStore::get(&config, "conference.closed").expect("lookup");
        assert_eq!(closed, Some(true));
    }

    #[test]
    fn get_absent_key_is_none() {
        let config = store("[conference]\n");
        let author: Option<String> =
            ConfigStore::get(&config, "conference.author").expect("lookup");
        assert!(author.is_none());
    }

    #[test]
    fn get_wrong_shape_is_error() {
        let config = store(
            r#"
            [conference.title]
            nested = "table"
            "#,
        );

        let err = ConfigStore::get::<i64>(&config, "conference.title").unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue { .. }));
    }

    #[test]
    fn get_or_falls_back_to_default() {
        let config = store("[conference]\n");
        let title = config
            .get_or("conference.title", "C3VOC".to_string())
            .expect("lookup");
        assert_eq!(title, "C3VOC");
    }

    #[test]
    fn child_keys_keep_configuration_order() {
        let config = store(
            r#"
            [rooms.saal1]
            name = "Saal 1"

            [rooms.borg]
            name = "Borg"

            [rooms.ada]
            name = "Saal Ada"
            "#,
        );

        let keys = config.child_keys("rooms").expect("lookup");
        assert_eq!(keys, ["saal1", "borg", "ada"]);
    }

    #[test]
    fn child_keys_of_absent_table_is_empty() {
        let config = store("[conference]\n");
        assert!(config.child_keys("rooms").expect("lookup").is_empty());
    }

    #[test]
    fn child_keys_of_scalar_is_error() {
        let config = store("rooms = 3\n");
        let err = config.child_keys("rooms").unwrap_err();
        assert_eq!(
            err,
            StoreError::NotATable {
                key: "rooms".to_string()
            }
        );
    }

    #[test]
    fn keys_match_regardless_of_case() {
        let config = store(
            r#"
            [CONFERENCE]
            TITLE = "36C3"
            STARTS_AT = 1000

            [ROOMS.Ada]
            name = "Saal Ada"
            "#,
        );

        assert!(ConfigStore::has(&config, "CONFERENCE.TITLE"));
        assert!(ConfigStore::has(&config, "conference.title"));
        let starts: Option<i64> = ConfigStore::get(&config, "conference.Starts_At").expect("lookup");
        assert_eq!(starts, Some(1000));
        assert_eq!(config.child_keys("rooms").expect("lookup"), ["Ada"]);
        assert!(ConfigStore::has(&config, "rooms.ada"));
        assert!(!ConfigStore::has(&config, "CONFERENCE.AUTHOR"));
    }

    #[test]
    fn exact_spelling_wins_over_case_insensitive_match() {
        let config = store(
            r#"
            [conference]
            title = "lower"
            TITLE = "upper"
            "#,
        );

        let title: Option<String> = ConfigStore::get(&config, "conference.TITLE").expect("lookup");
        assert_eq!(title.as_deref(), Some("upper"));
        let title: Option<String> = ConfigStore::get(&config, "Conference.title").expect("lookup");
        assert_eq!(title.as_deref(), Some("lower"));
    }

    #[test]
    fn reference_delegates() {
        let config = store("[conference]\ntitle = \"jev22\"\n");
        let by_ref = &config;
        assert!(ConfigStore::has(&by_ref, "conference.title"));
    }
}
