use serde::{Deserialize, Serialize};

use super::role::Role;

/// The signed-in user for one browser session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
    /// Role exactly as the backend sent it. Unknown roles are kept so the
    /// session still exists after an "Unknown role" login.
    pub role_name: Option<String>,
    pub display_name: String,
}

impl Identity {
    pub fn role(&self) -> Option<Role> {
        self.role_name.as_deref().and_then(Role::parse)
    }
}
