//! Users list view: the user-management page's filter schema.
//!
//! The page itself is manager-only; per-action gates (edit, role
//! assignment, suspicious toggle) live in [`crate::access`].

use crate::filter::{FieldSpec, FilterSchema, FilterState};
use crate::ConsoleContext;

/// Tokens offered by the role selector, in display order.
pub const ROLE_TOKENS: [&str; 4] = ["regular", "cashier", "manager", "superuser"];

pub static SCHEMA: FilterSchema = FilterSchema {
    fields: &[
        FieldSpec::text("name"),
        FieldSpec::choice("role", &ROLE_TOKENS),
        FieldSpec::toggle("verified", "verified", "unverified"),
        FieldSpec::toggle("activated", "activated", "inactive"),
    ],
    exclusive: &[],
    role_defaults: FilterSchema::no_defaults,
};

/// Filter state for the Users page, seeded from the current query string.
pub fn filter_state(ctx: &ConsoleContext, pairs: &[(String, String)]) -> FilterState {
    SCHEMA.seed(pairs, ctx.viewer, ctx.config.default_page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use crate::models::role::Role;
    use serde_json::Value;

    #[test]
    fn verified_tokens_project_to_the_boolean_api_field() {
        let ctx = ConsoleContext::new(ConsoleConfig::default(), Some(Role::Manager));
        let state = filter_state(&ctx, &[])
            .set("verified", "unverified")
            .unwrap();
        assert_eq!(state.api_params()["verified"], Value::Bool(false));
    }

    #[test]
    fn role_filter_accepts_exactly_the_four_roles() {
        let state = SCHEMA.state(Some(Role::Manager), 10);
        assert!(state.clone().set("role", "superuser").is_ok());
        assert!(state.set("role", "admin").is_err());
    }
}
