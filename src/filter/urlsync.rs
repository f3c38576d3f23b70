//! Projection between filter state and the URL query string.
//!
//! The URL carries only what the user changed: fields equal to the viewer's
//! defaults are omitted, `page` is omitted at 1, and `limit` is never
//! serialized (page size is not URL-adjustable). The host writes the result
//! back with history replacement so filter tweaks do not pollute back
//! navigation.

use crate::filter::schema::FieldKind;
use crate::filter::state::{FieldValue, FilterState};

impl FilterState {
    /// Query pairs to write back to the location, in schema order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for spec in self.schema().fields {
            let Some(value) = self.value(spec.key) else {
                continue;
            };
            match (value, &spec.kind) {
                (FieldValue::Text(s), _) | (FieldValue::Choice(s), _) if !s.is_empty() => {
                    pairs.push((spec.key.to_string(), s.clone()));
                }
                (
                    FieldValue::Toggle(v),
                    FieldKind::Toggle {
                        true_token,
                        false_token,
                    },
                ) if *v != self.default_toggle(spec.key) => {
                    if let Some(b) = v {
                        let token = if *b { *true_token } else { *false_token };
                        pairs.push((spec.key.to_string(), token.to_string()));
                    }
                }
                _ => {}
            }
        }
        if self.page() != 1 {
            pairs.push(("page".to_string(), self.page().to_string()));
        }
        pairs
    }

    /// Encoded form of [`FilterState::to_query`], without the leading `?`.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self.to_query()).unwrap_or_default()
    }
}

/// Decode an encoded query string (with or without a leading `?`) into the
/// pairs [`FilterState::from_query`] seeds from. Undecodable input yields no
/// pairs, never an error.
pub fn parse_query_str(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    serde_urlencoded::from_str(query).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::Role;
    use crate::views::{promotions, users};

    #[test]
    fn url_carries_only_non_default_fields() {
        let state = promotions::SCHEMA
            .state(Some(Role::Regular), 10)
            .set("name", "cake")
            .unwrap();
        // started=true / ended=false are the regular-role defaults
        assert_eq!(
            state.to_query(),
            vec![("name".to_string(), "cake".to_string())]
        );
    }

    #[test]
    fn non_default_toggle_and_page_are_serialized() {
        let state = promotions::SCHEMA
            .state(Some(Role::Regular), 10)
            .set("started", "false")
            .unwrap()
            .set_page(3);
        assert_eq!(
            state.to_query(),
            vec![
                ("started".to_string(), "false".to_string()),
                ("page".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn first_page_and_limit_are_never_serialized() {
        let state = users::SCHEMA
            .state(Some(Role::Manager), 25)
            .set("verified", "verified")
            .unwrap();
        let query = state.to_query();
        assert!(query.iter().all(|(k, _)| k != "page" && k != "limit"));
        assert_eq!(
            query,
            vec![("verified".to_string(), "verified".to_string())]
        );
    }

    #[test]
    fn query_string_is_percent_encoded() {
        let state = users::SCHEMA
            .state(Some(Role::Manager), 10)
            .set("name", "cake & tea")
            .unwrap();
        assert_eq!(state.to_query_string(), "name=cake+%26+tea");
        assert_eq!(
            parse_query_str("?name=cake+%26+tea"),
            vec![("name".to_string(), "cake & tea".to_string())]
        );
    }

    #[test]
    fn round_trip_reproduces_user_set_fields() {
        let state = users::SCHEMA
            .state(Some(Role::Manager), 10)
            .set("name", "abc")
            .unwrap();
        let reloaded = users::SCHEMA.seed(
            &parse_query_str(&state.to_query_string()),
            Some(Role::Manager),
            10,
        );
        assert_eq!(
            reloaded.value("name"),
            Some(&FieldValue::Text("abc".to_string()))
        );
        assert_eq!(reloaded.page(), 1);
    }

    #[test]
    fn round_trip_keeps_an_ended_true_window() {
        let state = promotions::SCHEMA
            .state(Some(Role::Regular), 10)
            .set("ended", "true")
            .unwrap();
        let reloaded = promotions::SCHEMA.seed(
            &parse_query_str(&state.to_query_string()),
            Some(Role::Regular),
            10,
        );
        assert_eq!(reloaded.toggle("ended"), Some(true));
        // the exclusion rule clears `started` again on reload
        assert_eq!(reloaded.toggle("started"), None);
    }
}
