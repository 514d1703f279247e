//! Conference metadata and availability for page templates.
//!
//! A [`Conference`] wraps the configuration store for one conference. Its
//! time configuration is read once when the conference is loaded, so every
//! availability query made while rendering one request sees the same
//! inputs. Metadata is read from the store on demand.

use crate::error::ConferenceError;
use crate::keys;
use crate::resolver::{self, Availability};
use crate::store::ConfigStore;
use crate::time_config::ConferenceTimeConfig;
use chrono::{DateTime, Utc};
use tracing::instrument;
use voc_streaming_core::{ConferenceSlug, Result, RoomSlug};

/// Title shown when a conference does not configure one.
pub const DEFAULT_TITLE: &str = "C3VOC";

/// One conference backed by a configuration store.
#[derive(Debug, Clone)]
pub struct Conference<S> {
    slug: ConferenceSlug,
    store: S,
    time: ConferenceTimeConfig,
}

impl<S: ConfigStore> Conference<S> {
    /// Loads a conference.
    ///
    /// `forced_open` is decided by the deployment (see
    /// [`DeploymentConfig`](crate::DeploymentConfig)) and fixed for the
    /// lifetime of the returned value.
    ///
    /// # Errors
    ///
    /// Returns an error if the start or end timestamp is malformed.
    #[instrument(skip(slug, store), fields(conference = %slug))]
    pub fn load(
        slug: ConferenceSlug,
        store: S,
        forced_open: bool,
    ) -> Result<Self, ConferenceError> {
        let time = ConferenceTimeConfig::from_store(&store, forced_open)?;
        Ok(Self { slug, store, time })
    }

    /// Returns the conference slug.
    #[must_use]
    pub fn slug(&self) -> &ConferenceSlug {
        &self.slug
    }

    /// Returns the inputs used for availability queries.
    #[must_use]
    pub fn time_config(&self) -> &ConferenceTimeConfig {
        &self.time
    }

    /// Returns true if the deployment forces this conference open.
    #[must_use]
    pub fn is_forced_open(&self) -> bool {
        self.time.forced_open()
    }

    /// Returns the configured start, if any.
    #[must_use]
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        self.time.starts_at()
    }

    /// Returns the configured end, if any.
    #[must_use]
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.time.ends_at()
    }

    /// Returns true if the conference has begun at `now`.
    ///
    /// The start instant itself counts as begun.
    #[must_use]
    pub fn has_begun(&self, now: DateTime<Utc>) -> bool {
        resolver::has_begun(&self.time, now)
    }

    /// Returns true if the conference has ended at `now`.
    ///
    /// The end instant itself counts as ended.
    #[must_use]
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        resolver::has_ended(&self.time, now)
    }

    /// Returns true if the conference has not begun or has already ended.
    #[must_use]
    pub fn is_closed(&self, now: DateTime<Utc>) -> bool {
        resolver::is_closed(&self.time, now)
    }

    /// Returns true if the conference is running at `now`.
    #[must_use]
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        resolver::is_open(&self.time, now)
    }

    /// Evaluates both availability facets at `now`.
    #[must_use]
    pub fn availability(&self, now: DateTime<Utc>) -> Availability {
        Availability::resolve(&self.time, now)
    }

    /// Returns the display title, defaulting to [`DEFAULT_TITLE`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured title is not a string.
    pub fn title(&self) -> Result<String, ConferenceError> {
        Ok(self
            .store
            .get_or(keys::TITLE, DEFAULT_TITLE.to_string())
            .map_err(ConferenceError::from)?)
    }

    /// Returns the author shown in page metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string.
    pub fn author(&self) -> Result<Option<String>, ConferenceError> {
        self.optional_string(keys::AUTHOR)
    }

    /// Returns the description shown in page metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string.
    pub fn description(&self) -> Result<Option<String>, ConferenceError> {
        self.optional_string(keys::DESCRIPTION)
    }

    /// Returns the keywords shown in page metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string.
    pub fn keywords(&self) -> Result<Option<String>, ConferenceError> {
        self.optional_string(keys::KEYWORDS)
    }

    /// Returns the URL of the conference's recording releases.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string.
    pub fn releases_url(&self) -> Result<Option<String>, ConferenceError> {
        self.optional_string(keys::RELEASES)
    }

    /// Returns operator-supplied banner markup.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string.
    pub fn banner_html(&self) -> Result<Option<String>, ConferenceError> {
        self.optional_string(keys::BANNER_HTML)
    }

    /// Returns operator-supplied footer markup.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string.
    pub fn footer_html(&self) -> Result<Option<String>, ConferenceError> {
        self.optional_string(keys::FOOTER_HTML)
    }

    /// Returns true if viewer feedback is configured.
    #[must_use]
    pub fn has_feedback(&self) -> bool {
        self.store.has(keys::FEEDBACK)
    }

    /// Returns the slugs of all configured rooms, in configuration order.
    ///
    /// # Errors
    ///
    /// Returns an error if `rooms` is not a table or a room key is not a
    /// valid slug.
    pub fn room_slugs(&self) -> Result<Vec<RoomSlug>, ConferenceError> {
        let names = self
            .store
            .child_keys(keys::ROOMS)
            .map_err(ConferenceError::from)?;

        let mut rooms = Vec::with_capacity(names.len());
        for name in names {
            let slug = name
                .parse::<RoomSlug>()
                .map_err(|e| ConferenceError::InvalidRoom {
                    slug: name.clone(),
                    reason: e.reason,
                })?;
            rooms.push(slug);
        }
        Ok(rooms)
    }

    /// Returns true if a room with this slug is configured.
    #[must_use]
    pub fn has_room(&self, slug: &RoomSlug) -> bool {
        self.store.has(&keys::room(slug.as_str()))
    }

    /// Resolves a room name from a request path to a configured room.
    ///
    /// Names that are not valid slugs, such as ones containing `.`, never
    /// match.
    #[must_use]
    pub fn room_if_exists(&self, name: &str) -> Option<RoomSlug> {
        let slug = name.parse::<RoomSlug>().ok()?;
        self.has_room(&slug).then_some(slug)
    }

    fn optional_string(&self, key: &str) -> Result<Option<String>, ConferenceError> {
        Ok(self.store.get(key).map_err(ConferenceError::from)?)
    }
}
