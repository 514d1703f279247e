//! Availability resolution for a conference.
//!
//! Three signals decide whether a conference is running, checked in this
//! order:
//!
//! 1. the deployment's forced-open flag, which makes every conference
//!    permanently running,
//! 2. the operator's [`ClosedOverride`],
//! 3. the configured start and end timestamps.
//!
//! Both boundaries are inclusive: a conference has begun at exactly
//! `starts_at` and has ended at exactly `ends_at`.
//!
//! None of these functions read the clock. Sample `now` once per request
//! and pass the same instant to every query, or use [`Availability`].

use crate::time_config::{ClosedOverride, ConferenceTimeConfig};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Returns true if the conference has begun at `now`.
#[must_use]
pub fn has_begun(config: &ConferenceTimeConfig, now: DateTime<Utc>) -> bool {
    if config.forced_open() {
        return true;
    }

    match config.closed() {
        ClosedOverride::LegacyBoolean(_) => return true,
        ClosedOverride::Before => return false,
        ClosedOverride::Running | ClosedOverride::After => return true,
        ClosedOverride::Unset | ClosedOverride::Unrecognized(_) => {}
    }

    config.starts_at().is_none_or(|starts_at| now >= starts_at)
}

/// Returns true if the conference has ended at `now`.
#[must_use]
pub fn has_ended(config: &ConferenceTimeConfig, now: DateTime<Utc>) -> bool {
    if config.forced_open() {
        return false;
    }

    match config.closed() {
        ClosedOverride::After | ClosedOverride::LegacyBoolean(true) => return true,
        ClosedOverride::Running | ClosedOverride::Before | ClosedOverride::LegacyBoolean(false) => {
            return false;
        }
        ClosedOverride::Unset | ClosedOverride::Unrecognized(_) => {}
    }

    config.ends_at().is_some_and(|ends_at| now >= ends_at)
}

/// Returns true if the conference has not begun or has already ended.
#[must_use]
pub fn is_closed(config: &ConferenceTimeConfig, now: DateTime<Utc>) -> bool {
    !has_begun(config, now) || has_ended(config, now)
}

/// Returns true if the conference is running at `now`.
#[must_use]
pub fn is_open(config: &ConferenceTimeConfig, now: DateTime<Utc>) -> bool {
    !is_closed(config, now)
}

/// Lifecycle phase of a conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConferencePhase {
    /// Not begun yet.
    Before,
    /// Begun and not ended.
    Running,
    /// Ended.
    After,
}

impl std::fmt::Display for ConferencePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::Running => write!(f, "running"),
            Self::After => write!(f, "after"),
        }
    }
}

/// Both availability facets evaluated at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    /// The instant the facets were evaluated at.
    pub at: DateTime<Utc>,
    /// Whether the conference had begun.
    pub has_begun: bool,
    /// Whether the conference had ended.
    pub has_ended: bool,
}

impl Availability {
    /// Evaluates `config` at `now`.
    #[must_use]
    pub fn resolve(config: &ConferenceTimeConfig, now: DateTime<Utc>) -> Self {
        let availability = Self {
            at: now,
            has_begun: has_begun(config, now),
            has_ended: has_ended(config, now),
        };
        debug!(
            at = %now,
            has_begun = availability.has_begun,
            has_ended = availability.has_ended,
            "resolved conference availability"
        );
        availability
    }

    /// Returns true if the conference has not begun or has ended.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.has_begun || self.has_ended
    }

    /// Returns true if the conference is running.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.is_closed()
    }

    /// Collapses both facets into a phase.
    ///
    /// A configuration whose end lies before its start can be both not
    /// begun and ended at once; that reports [`ConferencePhase::Before`].
    #[must_use]
    pub fn phase(&self) -> ConferencePhase {
        if !self.has_begun {
            ConferencePhase::Before
        } else if self.has_ended {
            ConferencePhase::After
        } else {
            ConferencePhase::Running
        }
    }
}
