//! Status report for one conference at one instant.

use crate::cli::Args;
use crate::error::StatusError;
use chrono::{DateTime, Utc};
use rootcause::prelude::ResultExt;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use voc_streaming_core::{ConferenceSlug, Result, RoomSlug};
use voc_streaming_model::{Conference, ConferencePhase, ConfigStore, DeploymentConfig};

/// Availability and identity of a conference, as printed by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub slug: ConferenceSlug,
    pub title: String,
    pub phase: ConferencePhase,
    pub has_begun: bool,
    pub has_ended: bool,
    pub is_open: bool,
    pub forced_open: bool,
    pub at: DateTime<Utc>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub rooms: Vec<RoomSlug>,
}

impl StatusReport {
    /// Builds a report from a loaded conference, evaluated at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the title or rooms are misconfigured.
    pub fn build<S: ConfigStore>(
        conference: &Conference<S>,
        now: DateTime<Utc>,
    ) -> Result<Self, StatusError> {
        let availability = conference.availability(now);
        let invalid = || StatusError::Conference {
            slug: conference.slug().clone(),
        };
        Ok(Self {
            slug: conference.slug().clone(),
            title: conference.title().context_with(invalid)?,
            phase: availability.phase(),
            has_begun: availability.has_begun,
            has_ended: availability.has_ended,
            is_open: availability.is_open(),
            forced_open: conference.is_forced_open(),
            at: availability.at,
            starts_at: conference.starts_at(),
            ends_at: conference.ends_at(),
            rooms: conference.room_slugs().context_with(invalid)?,
        })
    }
}

/// Loads the conference named by `args` and reports its status.
///
/// `now` is only used when `args.at` is not given.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or is invalid.
pub fn run(
    args: &Args,
    deployment: &DeploymentConfig,
    now: DateTime<Utc>,
) -> Result<StatusReport, StatusError> {
    let at = match args.at {
        Some(seconds) => {
            DateTime::from_timestamp(seconds, 0).ok_or(StatusError::InvalidInstant { seconds })?
        }
        None => now,
    };

    let store = load_store(&args.config)?;
    let forced_open = args.forced_open || deployment.forces_open(args.host.as_deref());

    let conference = Conference::load(args.slug.clone(), store, forced_open).context_with(|| {
        StatusError::Conference {
            slug: args.slug.clone(),
        }
    })?;

    let report = StatusReport::build(&conference, at)?;
    info!(
        conference = %report.slug,
        phase = %report.phase,
        forced_open,
        "evaluated conference status"
    );
    Ok(report)
}

fn load_store(path: &Path) -> Result<config::Config, StatusError> {
    config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .context_with(|| StatusError::ConfigFile {
            path: path.to_path_buf(),
        })
}
