use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, AsRefStr, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    /// Parses the role string sent by the backend. Matching is exact, so
    /// `"admin"` is not a role.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Where a freshly signed-in user of this role lands.
    pub fn landing_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Employee => "/employee",
        }
    }
}
