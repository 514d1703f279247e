//! Conference model and availability resolution for the streaming website.
//!
//! This crate provides:
//!
//! - **Config store**: the key-value lookup seam (`ConfigStore`) and its
//!   implementation for `config::Config`
//! - **Time config**: the inputs that decide whether a conference is running
//! - **Resolver**: pure `has_begun` / `has_ended` evaluation with override precedence
//! - **Conference**: metadata and room lookups for page templates
//! - **Deployment**: environment-level settings such as forced-open preview hosts
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use voc_streaming_model::{ClosedOverride, ConferenceTimeConfig, resolver};
//!
//! let config = ConferenceTimeConfig::new(false, ClosedOverride::Unset)
//!     .with_starts_at(Utc.timestamp_opt(1000, 0).unwrap())
//!     .with_ends_at(Utc.timestamp_opt(2000, 0).unwrap());
//!
//! let now = Utc.timestamp_opt(1500, 0).unwrap();
//! assert!(resolver::has_begun(&config, now));
//! assert!(!resolver::has_ended(&config, now));
//! assert!(resolver::is_open(&config, now));
//! ```

pub mod conference;
pub mod deployment;
pub mod error;
pub mod keys;
pub mod resolver;
pub mod store;
pub mod time_config;

pub use conference::Conference;
pub use deployment::DeploymentConfig;
pub use error::{ConferenceError, StoreError};
pub use resolver::{Availability, ConferencePhase};
pub use store::ConfigStore;
pub use time_config::{ClosedOverride, ConferenceTimeConfig};
