//! Projection of filter state into backend list-endpoint parameters.

use serde_json::{Map, Value};

use crate::filter::state::{FieldValue, FilterState};

impl FilterState {
    /// Parameter map for the backing list request.
    ///
    /// Always carries `page` and `limit` as numbers. Every other field
    /// appears only when set: text and choice tokens pass through verbatim
    /// under the field's API name, toggles become genuine JSON booleans. No
    /// key ever maps to an empty string or null, so the map can be appended
    /// to a request as-is.
    pub fn api_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("page".to_string(), Value::from(self.page()));
        params.insert("limit".to_string(), Value::from(self.limit()));
        for spec in self.schema().fields {
            let Some(value) = self.value(spec.key) else {
                continue;
            };
            match value {
                FieldValue::Text(s) | FieldValue::Choice(s) if !s.is_empty() => {
                    params.insert(spec.api_name().to_string(), Value::from(s.clone()));
                }
                FieldValue::Toggle(Some(b)) => {
                    params.insert(spec.api_name().to_string(), Value::from(*b));
                }
                _ => {}
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use crate::models::role::Role;
    use crate::views::{events, promotions, users};
    use serde_json::{json, Value};

    #[test]
    fn always_carries_page_and_limit_as_numbers() {
        let params = promotions::SCHEMA
            .state(Some(Role::Manager), 10)
            .set_page(2)
            .api_params();
        assert_eq!(params["page"], json!(2));
        assert_eq!(params["limit"], json!(10));
    }

    #[test]
    fn unset_fields_are_omitted_entirely() {
        let params = users::SCHEMA.state(Some(Role::Manager), 10).api_params();
        assert_eq!(params.len(), 2, "only page and limit: {params:?}");
    }

    #[test]
    fn no_value_is_ever_empty_null_or_a_stringified_boolean() {
        let params = users::SCHEMA
            .state(Some(Role::Manager), 10)
            .set("name", "jan")
            .unwrap()
            .set("role", "cashier")
            .unwrap()
            .set("verified", "unverified")
            .unwrap()
            .api_params();
        for (key, value) in &params {
            assert!(!value.is_null(), "{key} is null");
            assert_ne!(value, &json!(""), "{key} is empty");
            assert_ne!(value, &json!("true"), "{key} is a stringified boolean");
            assert_ne!(value, &json!("false"), "{key} is a stringified boolean");
        }
        assert_eq!(params["verified"], Value::Bool(false));
        assert_eq!(params["role"], json!("cashier"));
    }

    #[test]
    fn ui_tokens_map_to_genuine_booleans() {
        let params = users::SCHEMA
            .state(Some(Role::Manager), 10)
            .set("verified", "verified")
            .unwrap()
            .api_params();
        assert_eq!(params["verified"], Value::Bool(true));
    }

    #[test]
    fn role_defaults_are_projected_like_any_set_value() {
        let params = promotions::SCHEMA
            .state(Some(Role::Regular), 10)
            .api_params();
        assert_eq!(params["started"], Value::Bool(true));
        assert_eq!(params["ended"], Value::Bool(false));

        let params = promotions::SCHEMA
            .state(Some(Role::Manager), 10)
            .api_params();
        assert!(!params.contains_key("started"));
        assert!(!params.contains_key("ended"));
    }

    #[test]
    fn api_key_renames_apply() {
        let params = events::SCHEMA
            .state(Some(Role::Manager), 10)
            .set("full", "true")
            .unwrap()
            .api_params();
        assert_eq!(params["showFull"], Value::Bool(true));
        assert!(!params.contains_key("full"));
    }

    #[test]
    fn never_projects_both_sides_of_an_exclusive_pair_as_true() {
        let params = promotions::SCHEMA
            .state(Some(Role::Regular), 10)
            .set("started", "true")
            .unwrap()
            .set("ended", "true")
            .unwrap()
            .api_params();
        assert_ne!(
            (params.get("started"), params.get("ended")),
            (Some(&Value::Bool(true)), Some(&Value::Bool(true))),
        );
    }
}
