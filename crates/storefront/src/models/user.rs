//! User profile domain type.

use serde::{Deserialize, Serialize};

use aura_scents_core::{Email, UserId};

use super::Address;

/// The single local customer.
///
/// There is no authentication; the profile only prefills checkout and
/// stamps the owner on placed orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user ID.
    pub id: UserId,
    /// Validated email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Contact number, if known.
    pub phone: Option<String>,
    /// Default shipping address, if known.
    pub address: Option<Address>,
}
