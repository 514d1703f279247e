//! Dotted configuration paths read by the model.
//!
//! Paths are matched case-insensitively by the `config::Config` store, so
//! `[CONFERENCE]` and `[conference]` tables are both understood.

/// Explicit status override: `"before"`, `"running"`, `"after"`, or a legacy boolean.
pub const CLOSED: &str = "CONFERENCE.CLOSED";
/// Start of the conference, Unix seconds.
pub const STARTS_AT: &str = "CONFERENCE.STARTS_AT";
/// End of the conference, Unix seconds.
pub const ENDS_AT: &str = "CONFERENCE.ENDS_AT";

pub const TITLE: &str = "CONFERENCE.TITLE";
pub const AUTHOR: &str = "CONFERENCE.AUTHOR";
pub const DESCRIPTION: &str = "CONFERENCE.DESCRIPTION";
pub const KEYWORDS: &str = "CONFERENCE.KEYWORDS";
pub const RELEASES: &str = "CONFERENCE.RELEASES";
pub const BANNER_HTML: &str = "CONFERENCE.BANNER_HTML";
pub const FOOTER_HTML: &str = "CONFERENCE.FOOTER_HTML";

pub const FEEDBACK: &str = "FEEDBACK";
pub const ROOMS: &str = "ROOMS";

/// Path of a single room's table.
#[must_use]
pub fn room(slug: &str) -> String {
    format!("{ROOMS}.{slug}")
}
