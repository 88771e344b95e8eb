use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{identity::Identity, role::Role};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"email": "john.doe@company.com", "password": "secret"}))]
pub struct LoginReqDto {
    pub email: String,
    pub password: String,
}

/// Body returned by a successful portal login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "5",
    "email": "x@y.com",
    "role": "ADMIN",
    "displayName": "x@y.com",
    "redirect": "/admin"
}))]
pub struct LoginResponse {
    pub id: String,
    pub email: Option<String>,
    pub role: Role,
    pub display_name: String,
    pub redirect: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub id: String,
    pub email: Option<String>,
    /// `null` when the backend sent a role the portal does not know
    pub role: Option<Role>,
    pub display_name: String,
}

impl From<&Identity> for IdentityResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.user_id.clone(),
            email: identity.email.clone(),
            role: identity.role(),
            display_name: identity.display_name.clone(),
        }
    }
}
