//! User domain types.
//!
//! The signed-in user is owned by the session store: replaced wholesale on
//! login, cleared on logout, and patched field-by-field on profile updates.
//! Authentication itself is mocked; no credentials exist in this system.

use serde::{Deserialize, Serialize};

use velvet_cactus_core::UserId;

/// A postal address on a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// A signed-in storefront user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Avatar image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Shipping address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// A partial update to a [`User`] profile.
///
/// Only fields that are `Some` are applied; everything else is left as-is.
/// The ID is never updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl UserUpdate {
    /// Merge this patch into an existing user.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(phone) = self.phone {
            user.phone = Some(phone);
        }
        if let Some(address) = self.address {
            user.address = Some(address);
        }
    }
}
