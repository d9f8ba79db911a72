use serde::{Deserialize, Serialize};

use super::{GUEST_AVATAR, GUEST_EMAIL, GUEST_NAME};

/// Per-profile identity and balance record.
///
/// `balance` may be fractional and is only ever mutated through the ledger
/// store; a validated withdrawal can never drive it negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub photo: String,
    pub phone: Option<String>,
    pub balance: f64,
}

impl Account {
    /// Fallback identity for a profile that never registered.
    pub fn guest(balance: f64) -> Self {
        Self {
            name: GUEST_NAME.to_string(),
            email: GUEST_EMAIL.to_string(),
            photo: GUEST_AVATAR.to_string(),
            phone: None,
            balance,
        }
    }
}
