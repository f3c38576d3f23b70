//! Filter state: seeding, transitions, and role-default re-derivation.

use std::collections::{BTreeMap, BTreeSet};

use crate::errors::FilterError;
use crate::filter::exclusive::{self, Side};
use crate::filter::schema::{FieldKind, FieldSpec, FilterSchema};
use crate::models::role::Role;

/// Current value of one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(String),
    Toggle(Option<bool>),
}

impl FieldValue {
    /// Whether the field holds a value that filters anything.
    pub fn is_set(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => !s.is_empty(),
            FieldValue::Toggle(v) => v.is_some(),
        }
    }

    fn unset_for(kind: &FieldKind) -> FieldValue {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Choice { .. } => FieldValue::Choice(String::new()),
            FieldKind::Toggle { .. } => FieldValue::Toggle(None),
        }
    }
}

/// Query criteria of one list view instance.
///
/// Created on page mount, discarded on navigation; the only state that
/// outlives the page is what [`FilterState::to_query`] writes to the URL.
#[derive(Debug, Clone)]
pub struct FilterState {
    schema: &'static FilterSchema,
    viewer: Option<Role>,
    values: BTreeMap<&'static str, FieldValue>,
    touched: BTreeSet<&'static str>,
    page: u64,
    limit: u64,
}

impl FilterState {
    /// Fresh state holding the viewer's defaults.
    pub fn new(schema: &'static FilterSchema, viewer: Option<Role>, limit: u64) -> Self {
        let mut values = BTreeMap::new();
        for spec in schema.fields {
            values.insert(spec.key, FieldValue::unset_for(&spec.kind));
        }
        let mut state = Self {
            schema,
            viewer,
            values,
            touched: BTreeSet::new(),
            page: 1,
            limit,
        };
        state.seed_role_defaults();
        state
    }

    fn seed_role_defaults(&mut self) {
        for (key, value) in (self.schema.role_defaults)(self.viewer) {
            if let Some(slot) = self.values.get_mut(key) {
                *slot = FieldValue::Toggle(Some(*value));
            }
        }
    }

    /// Seed state from decoded query pairs, falling back to defaults.
    ///
    /// Query input is untrusted: unrecognized keys and malformed values are
    /// skipped, and a malformed `page` falls back to 1. Values read from the
    /// URL count as user-set for [`FilterState::apply_role`].
    pub fn from_query(
        schema: &'static FilterSchema,
        pairs: &[(String, String)],
        viewer: Option<Role>,
        default_limit: u64,
    ) -> Self {
        let mut state = Self::new(schema, viewer, default_limit);
        for (key, raw) in pairs {
            if key == "page" {
                state.page = parse_page(raw);
                continue;
            }
            let Some(spec) = schema.field(key) else {
                tracing::debug!(key = %key, "ignoring unrecognized query key");
                continue;
            };
            match parse_value(spec, raw) {
                Ok(value) => state.assign(spec.key, value),
                Err(err) => {
                    tracing::debug!(key = %key, raw = %raw, error = %err, "ignoring malformed query value");
                }
            }
        }
        state
    }

    /// Single setter entry point for UI filter changes.
    ///
    /// Any key other than `"page"` resets `page` to 1. Unknown keys and
    /// tokens outside a field's domain are programmer errors and rejected;
    /// the empty string unsets any field.
    pub fn set(mut self, key: &str, raw: &str) -> Result<Self, FilterError> {
        if key == "page" {
            self.page = parse_page(raw);
            return Ok(self);
        }
        if key == "limit" {
            self.limit = raw.parse().unwrap_or(self.limit);
            self.page = 1;
            return Ok(self);
        }
        let spec = self
            .schema
            .field(key)
            .ok_or_else(|| FilterError::UnknownField(key.to_string()))?;
        let value = parse_value(spec, raw)?;
        self.assign(spec.key, value);
        self.page = 1;
        Ok(self)
    }

    /// Jump to a page without disturbing any filter.
    pub fn set_page(mut self, page: u64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Change the page size; resets to the first page.
    pub fn set_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self.page = 1;
        self
    }

    /// Re-derive role defaults after a role switch.
    ///
    /// Only fields the user never touched move to the new role's defaults;
    /// everything explicitly set (including values seeded from the URL)
    /// stays put.
    pub fn apply_role(mut self, viewer: Option<Role>) -> Self {
        let old = (self.schema.role_defaults)(self.viewer);
        let new = (self.schema.role_defaults)(viewer);
        for &(key, _) in old.iter().chain(new.iter()) {
            if self.touched.contains(key) {
                continue;
            }
            let value = new.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v);
            self.values.insert(key, FieldValue::Toggle(value));
        }
        tracing::debug!(viewer = ?viewer, "re-derived role defaults");
        self.viewer = viewer;
        self
    }

    fn assign(&mut self, key: &'static str, value: FieldValue) {
        self.values.insert(key, value);
        self.touched.insert(key);
        self.resolve_exclusive(key);
    }

    fn resolve_exclusive(&mut self, changed: &str) {
        let pairs = self.schema.exclusive;
        for (first, second) in pairs {
            let (side, partner_key) = if changed == *first {
                (Side::First, *second)
            } else if changed == *second {
                (Side::Second, *first)
            } else {
                continue;
            };
            let new_value = self.toggle(changed);
            let partner = self.toggle(partner_key);
            let resolved = exclusive::partner_after(side, new_value, partner);
            if resolved != partner {
                self.values
                    .insert(partner_key, FieldValue::Toggle(resolved));
            }
        }
    }

    pub fn schema(&self) -> &'static FilterSchema {
        self.schema
    }

    pub fn viewer(&self) -> Option<Role> {
        self.viewer
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Current value of a schema field.
    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Current value of a toggle field; `None` when unset or not a toggle.
    pub fn toggle(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(FieldValue::Toggle(v)) => *v,
            _ => None,
        }
    }

    /// Whether the user (or the URL they arrived with) set this field.
    pub fn is_touched(&self, key: &str) -> bool {
        self.touched.contains(key)
    }

    /// The viewer's default for a toggle field.
    pub(crate) fn default_toggle(&self, key: &str) -> Option<bool> {
        (self.schema.role_defaults)(self.viewer)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

impl FilterSchema {
    /// Fresh [`FilterState`] for this schema holding the viewer's defaults.
    pub fn state(&'static self, viewer: Option<Role>, limit: u64) -> FilterState {
        FilterState::new(self, viewer, limit)
    }

    /// [`FilterState`] for this schema seeded from decoded query pairs.
    pub fn seed(
        &'static self,
        pairs: &[(String, String)],
        viewer: Option<Role>,
        limit: u64,
    ) -> FilterState {
        FilterState::from_query(self, pairs, viewer, limit)
    }
}

fn parse_page(raw: &str) -> u64 {
    raw.parse().ok().filter(|page| *page >= 1).unwrap_or(1)
}

fn parse_value(spec: &FieldSpec, raw: &str) -> Result<FieldValue, FilterError> {
    match spec.kind {
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Choice { allowed } => {
            if raw.is_empty() || allowed.contains(&raw) {
                Ok(FieldValue::Choice(raw.to_string()))
            } else {
                Err(FilterError::InvalidValue {
                    field: spec.key,
                    value: raw.to_string(),
                })
            }
        }
        FieldKind::Toggle {
            true_token,
            false_token,
        } => {
            if raw.is_empty() {
                Ok(FieldValue::Toggle(None))
            } else if raw == true_token {
                Ok(FieldValue::Toggle(Some(true)))
            } else if raw == false_token {
                Ok(FieldValue::Toggle(Some(false)))
            } else {
                Err(FilterError::InvalidValue {
                    field: spec.key,
                    value: raw.to_string(),
                })
            }
        }
    }
}
