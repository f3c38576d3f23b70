//! Query-state core of the PointDesk loyalty administration console.
//!
//! Owns the logic every list view shares: filter state seeded from and
//! mirrored back to the URL query string, projection of that state into the
//! parameter map the backend list endpoints expect, pagination window
//! arithmetic, and the role gates deciding which affordances a viewer gets.
//! Fetching, navigation, and session handling live in the host application.

pub mod access;
pub mod config;
pub mod errors;
pub mod filter;
pub mod models;
pub mod views;

use models::role::Role;

/// Shared console context passed to every view constructor.
///
/// The viewer role comes from the auth collaborator and may be absent (not
/// signed in, or an unrecognized role string); every consumer must fail
/// closed on `None`.
#[derive(Debug, Clone)]
pub struct ConsoleContext {
    pub config: config::ConsoleConfig,
    pub viewer: Option<Role>,
}

impl ConsoleContext {
    pub fn new(config: config::ConsoleConfig, viewer: Option<Role>) -> Self {
        Self { config, viewer }
    }
}
