//! Deployment-level settings.
//!
//! These come from the environment of the running site, not from any
//! conference's configuration tree. Variables use the `STREAMING` prefix
//! and `__` as separator:
//!
//! - `STREAMING__FORCED_OPEN=true` opens every conference
//! - `STREAMING__PREVIEW_HOSTS=preview.example.org,staging.example.org`
//!   opens every conference for requests to those hosts

use serde::Deserialize;

const ENV_PREFIX: &str = "STREAMING";

/// Settings that apply to every conference served by this deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeploymentConfig {
    /// Treat every conference as running.
    #[serde(default)]
    pub forced_open: bool,

    /// Hosts that serve previews; requests to them see every conference as running.
    #[serde(default)]
    pub preview_hosts: Vec<String>,
}

impl DeploymentConfig {
    /// Loads settings from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("preview_hosts")
    }

    fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Returns true if conferences must be forced open for a request to `host`.
    ///
    /// Hosts compare case-insensitively and any `:port` suffix is ignored.
    #[must_use]
    pub fn forces_open(&self, host: Option<&str>) -> bool {
        if self.forced_open {
            return true;
        }
        let Some(host) = host else {
            return false;
        };
        let host = strip_port(host);
        self.preview_hosts
            .iter()
            .any(|preview| strip_port(preview.trim()).eq_ignore_ascii_case(host))
    }
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !name.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}
