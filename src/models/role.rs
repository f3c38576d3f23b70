//! Console roles.
//!
//! The auth collaborator hands the console a role token as a plain string.
//! Parsing is lenient: an unrecognized token becomes `None`, which every
//! gate treats as "no elevated permissions" and every label renders as
//! `"Unknown"`. The console never crashes on a role it does not know.

use serde::{Deserialize, Deserializer, Serialize};

/// Role of a console user, lowest to highest privilege.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Regular,
    Cashier,
    Manager,
    Superuser,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Regular, Role::Cashier, Role::Manager, Role::Superuser];

    /// Parse a role token. Unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Role> {
        match token {
            "regular" => Some(Role::Regular),
            "cashier" => Some(Role::Cashier),
            "manager" => Some(Role::Manager),
            "superuser" => Some(Role::Superuser),
            _ => None,
        }
    }

    /// Wire token, identical to the serde representation.
    pub fn as_token(&self) -> &'static str {
        match self {
            Role::Regular => "regular",
            Role::Cashier => "cashier",
            Role::Manager => "manager",
            Role::Superuser => "superuser",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Regular => "Regular",
            Role::Cashier => "Cashier",
            Role::Manager => "Manager",
            Role::Superuser => "Superuser",
        }
    }
}

/// Display label for a possibly-unrecognized role.
pub fn role_label(role: Option<Role>) -> &'static str {
    role.map(|r| r.label()).unwrap_or("Unknown")
}

/// Serde helper: deserialize a role string without failing on unknown tokens.
///
/// Used on DTO fields so one user row with a role this build does not know
/// cannot poison a whole list response.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.as_deref().and_then(Role::parse))
}
