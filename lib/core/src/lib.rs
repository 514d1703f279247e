//! Core domain types and utilities for the streaming website.
//!
//! This crate provides the `Result` alias used across the workspace and
//! the slug newtypes that name conferences and rooms.

pub mod error;
pub mod slug;

pub use error::Result;
pub use slug::{ConferenceSlug, ParseSlugError, RoomSlug};
