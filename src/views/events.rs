//! Events list view: filter schema for the RSVP/organizer page.

use crate::access;
use crate::filter::{FieldSpec, FilterSchema, FilterState};
use crate::models::role::Role;
use crate::ConsoleContext;

pub static SCHEMA: FilterSchema = FilterSchema {
    fields: &[
        FieldSpec::text("name"),
        FieldSpec::text("location"),
        FieldSpec::toggle("started", "true", "false"),
        FieldSpec::toggle("ended", "true", "false"),
        // Visible to managers only; gate with access::can_see_unpublished.
        FieldSpec::toggle("published", "true", "false"),
        FieldSpec::toggle("full", "true", "false").with_api_key("showFull"),
    ],
    exclusive: &[("started", "ended")],
    role_defaults: window_defaults,
};

/// Non-managers default to hiding events that already ended.
fn window_defaults(viewer: Option<Role>) -> &'static [(&'static str, bool)] {
    if access::is_manager(viewer) {
        &[]
    } else {
        &[("ended", false)]
    }
}

/// Filter state for the Events page, seeded from the current query string.
pub fn filter_state(ctx: &ConsoleContext, pairs: &[(String, String)]) -> FilterState {
    SCHEMA.seed(pairs, ctx.viewer, ctx.config.default_page_size)
}
