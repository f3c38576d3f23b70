//! Schema-driven filter state shared by every list view.
//!
//! Each view declares its recognized fields once as a static
//! [`FilterSchema`]; one [`FilterState`] implementation handles seeding from
//! the URL, transitions, role-default re-derivation, URL write-back, and
//! projection to API parameters for all of them.

pub mod exclusive;
pub mod params;
pub mod schema;
pub mod state;
pub mod urlsync;

pub use schema::{FieldKind, FieldSpec, FilterSchema};
pub use state::{FieldValue, FilterState};
