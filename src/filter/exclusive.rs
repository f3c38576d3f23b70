//! Mutual exclusion between paired window toggles.
//!
//! A schema may declare a toggle pair like `(started, ended)` that the
//! backend refuses to see both set to true. The constraint is resolved here,
//! in one place, so a request with both can never be constructed:
//!
//! - setting the first side to true clears a partner that was also true;
//!   a partner explicitly set to false survives;
//! - setting the second side to true always clears the first.

/// Which side of an exclusive pair changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

/// Value the partner field holds after one side of the pair changes.
pub fn partner_after(side: Side, new_value: Option<bool>, partner: Option<bool>) -> Option<bool> {
    if new_value != Some(true) {
        return partner;
    }
    match side {
        Side::First => {
            if partner == Some(false) {
                partner
            } else {
                None
            }
        }
        Side::Second => None,
    }
}
