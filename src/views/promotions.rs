//! Promotions list view: filter schema and role-aware defaults.

use crate::access;
use crate::filter::{FieldSpec, FilterSchema, FilterState};
use crate::models::role::Role;
use crate::ConsoleContext;

pub static SCHEMA: FilterSchema = FilterSchema {
    fields: &[
        FieldSpec::text("name"),
        FieldSpec::choice("type", &["automatic", "one-time"]),
        FieldSpec::toggle("started", "true", "false"),
        FieldSpec::toggle("ended", "true", "false"),
    ],
    exclusive: &[("started", "ended")],
    role_defaults: window_defaults,
};

/// Non-managers land on promotions that are currently running; managers see
/// the unfiltered list.
fn window_defaults(viewer: Option<Role>) -> &'static [(&'static str, bool)] {
    if access::is_manager(viewer) {
        &[]
    } else {
        &[("started", true), ("ended", false)]
    }
}

/// Filter state for the Promotions page, seeded from the current query
/// string.
pub fn filter_state(ctx: &ConsoleContext, pairs: &[(String, String)]) -> FilterState {
    SCHEMA.seed(pairs, ctx.viewer, ctx.config.default_page_size)
}
