//! Strongly-typed slugs for conferences and rooms.
//!
//! Slugs appear both in URL paths and as segments of dotted configuration
//! keys (`rooms.<slug>`), so they are restricted to ASCII letters, digits,
//! `-` and `_`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a slug from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSlugError {
    /// The type of slug that failed to parse.
    pub slug_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseSlugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.slug_type, self.reason)
    }
}

impl std::error::Error for ParseSlugError {}

fn validate(slug_type: &'static str, s: &str) -> Result<(), ParseSlugError> {
    if s.is_empty() {
        return Err(ParseSlugError {
            slug_type,
            reason: "slug is empty".to_string(),
        });
    }
    if let Some(bad) = s
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ParseSlugError {
            slug_type,
            reason: format!("invalid character {bad:?} in '{s}'"),
        });
    }
    Ok(())
}

/// Macro to generate a validated slug wrapper around `String`.
macro_rules! define_slug {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Returns the slug as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseSlugError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate(stringify!($name), s)?;
                Ok(Self(s.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseSlugError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                validate(stringify!($name), &s)?;
                Ok(Self(s))
            }
        }

        impl From<$name> for String {
            fn from(slug: $name) -> Self {
                slug.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_slug!(
    /// Slug identifying a conference (e.g. `36c3`).
    ConferenceSlug
);

define_slug!(
    /// Slug identifying a room within a conference (e.g. `hall-a`).
    RoomSlug
);
