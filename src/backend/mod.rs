pub mod rest;

use async_trait::async_trait;
use derive_more::Display;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::model::{
    attendance::AttendanceRecord, employee::Employee, leave_request::LeaveRecord,
};
use crate::models::LoginReqDto;

#[derive(Debug, Display)]
pub enum BackendError {
    #[display(fmt = "EMS backend unreachable: {}", _0)]
    Transport(reqwest::Error),

    #[display(fmt = "EMS backend rejected the credentials")]
    Unauthorized,

    #[display(fmt = "EMS backend responded with status {}", _0)]
    Status(u16),

    #[display(fmt = "Unexpected EMS backend payload: {}", _0)]
    Decode(String),
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            BackendError::Decode(e.to_string())
        } else {
            BackendError::Transport(e)
        }
    }
}

/// Reply of the backend credential exchange. A reply without `id` means the
/// credentials were not accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReply {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fname: Option<String>,
    #[serde(default)]
    pub lname: Option<String>,
}

/// The EMS REST backend as seen by the portal.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn login(&self, credentials: &LoginReqDto) -> Result<LoginReply, BackendError>;
    async fn employees(&self) -> Result<Vec<Employee>, BackendError>;
    async fn attendance(&self) -> Result<Vec<AttendanceRecord>, BackendError>;
    async fn leaves(&self) -> Result<Vec<LeaveRecord>, BackendError>;
}

/// Decodes a collection element by element. Elements that do not decode are
/// logged and skipped so one bad row cannot take a report down.
pub fn decode_collection<T: DeserializeOwned>(kind: &'static str, items: Vec<Value>) -> Vec<T> {
    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                warn!(kind, index, "Skipping non-object element");
                return None;
            }
            serde_json::from_value(item)
                .map_err(|e| warn!(kind, index, error = %e, "Skipping malformed element"))
                .ok()
        })
        .collect();

    if decoded.len() != total {
        warn!(kind, total, kept = decoded.len(), "Collection had unusable elements");
    }
    decoded
}
