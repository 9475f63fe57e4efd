//! Session identity model.

use serde::{Deserialize, Serialize};
use tempmail_api::User;

/// The authenticated identity: user record plus bearer credential.
///
/// The two are a unit; an `Identity` never exists with one and not the
/// other, which encodes the session invariant in the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The authenticated user record.
    pub user: User,
    /// Opaque bearer credential issued by the backend.
    pub token: String,
}

impl Identity {
    /// Account email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.user.name
    }
}
