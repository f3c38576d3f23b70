//! Error type for programmatic misuse of the filter API.
//!
//! Only the typed setter surface returns errors. Query-string input is
//! untrusted and never fails: unrecognized keys and malformed values are
//! skipped during seeding.

/// Rejections raised by [`crate::filter::FilterState::set`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("unknown filter field: {0}")]
    UnknownField(String),

    #[error("invalid value {value:?} for filter field {field}")]
    InvalidValue { field: &'static str, value: String },
}

impl FilterError {
    pub fn is_unknown_field(&self) -> bool {
        matches!(self, Self::UnknownField(_))
    }
}
