//! Static per-view filter schemas.

use crate::models::role::Role;

/// Kind and parsing rules of one filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; the empty string means unset.
    Text,
    /// One token out of a fixed set; the empty string means unset.
    Choice { allowed: &'static [&'static str] },
    /// Tristate backed by a boolean API field. The tokens are what the UI
    /// controls and the URL carry for the two set states.
    Toggle {
        true_token: &'static str,
        false_token: &'static str,
    },
}

/// One recognized filter field of a view.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
    /// Field name at the API boundary when it differs from `key`.
    pub api_key: Option<&'static str>,
}

impl FieldSpec {
    pub const fn text(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Text,
            api_key: None,
        }
    }

    pub const fn choice(key: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            key,
            kind: FieldKind::Choice { allowed },
            api_key: None,
        }
    }

    pub const fn toggle(
        key: &'static str,
        true_token: &'static str,
        false_token: &'static str,
    ) -> Self {
        Self {
            key,
            kind: FieldKind::Toggle {
                true_token,
                false_token,
            },
            api_key: None,
        }
    }

    pub const fn with_api_key(mut self, api_key: &'static str) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Name of the field in the projected parameter map.
    pub fn api_name(&self) -> &'static str {
        self.api_key.unwrap_or(self.key)
    }
}

/// Recognized fields and constraints of one list view.
#[derive(Debug)]
pub struct FilterSchema {
    pub fields: &'static [FieldSpec],
    /// Toggle pairs the backend refuses to see both set to true
    /// (resolved client-side, see [`crate::filter::exclusive`]).
    pub exclusive: &'static [(&'static str, &'static str)],
    /// Toggle values seeded for fields the user has not touched.
    pub role_defaults: fn(Option<Role>) -> &'static [(&'static str, bool)],
}

impl FilterSchema {
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// `role_defaults` for views whose seed values do not depend on role.
    pub fn no_defaults(_viewer: Option<Role>) -> &'static [(&'static str, bool)] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SCHEMA: FilterSchema = FilterSchema {
        fields: &[
            FieldSpec::text("name"),
            FieldSpec::toggle("full", "true", "false").with_api_key("showFull"),
        ],
        exclusive: &[],
        role_defaults: FilterSchema::no_defaults,
    };

    #[test]
    fn field_lookup_by_key() {
        assert!(SCHEMA.field("name").is_some());
        assert!(SCHEMA.field("color").is_none());
    }

    #[test]
    fn api_name_defaults_to_key() {
        assert_eq!(SCHEMA.field("name").unwrap().api_name(), "name");
        assert_eq!(SCHEMA.field("full").unwrap().api_name(), "showFull");
    }
}
