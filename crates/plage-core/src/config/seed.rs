//! Startup seed configuration.

use serde::{Deserialize, Serialize};

/// Accounts provisioned at startup.
///
/// Role assignment happens here, at provisioning time. Nothing in the
/// request path grants roles based on the identity itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Email of the bootstrap admin account. When set together with
    /// `admin_password`, the account is created on startup if absent.
    #[serde(default)]
    pub admin_email: Option<String>,
    /// Password of the bootstrap admin account.
    #[serde(default)]
    pub admin_password: Option<String>,
}

impl SeedConfig {
    /// Returns the admin credentials when both halves are configured.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (self.admin_email.as_deref(), self.admin_password.as_deref()) {
            (Some(email), Some(password)) => Some((email, password)),
            _ => None,
        }
    }
}
