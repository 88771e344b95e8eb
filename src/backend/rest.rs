use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use super::{Backend, BackendError, LoginReply, decode_collection};
use crate::model::{
    attendance::AttendanceRecord, employee::Employee, employee_ref::EmployeeKey,
    leave_request::LeaveRecord,
};
use crate::models::LoginReqDto;

const LOGIN_PATH: &str = "/api/auth/login";
const EMPLOYEES_PATH: &str = "/api/employee/employees";
const ATTENDANCE_PATH: &str = "/api/attendance/attendances";
const LEAVES_PATH: &str = "/api/leave/leaves";

/// [`Backend`] over the EMS REST API. No timeout or retry is applied; a
/// failed call is reported to the caller as is.
pub struct RestBackend {
    client: Client,
    base_url: String,
}

impl RestBackend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        kind: &'static str,
        path: &str,
    ) -> Result<Vec<T>, BackendError> {
        let url = self.url(path);
        debug!(%url, kind, "Fetching collection");

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(error = %e, %url, "Collection request failed");
            BackendError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), %url, "Collection request rejected");
            return Err(BackendError::Status(status.as_u16()));
        }

        // a `null` body is treated as an empty collection
        let items: Option<Vec<Value>> = response.json().await?;
        Ok(decode_collection(kind, items.unwrap_or_default()))
    }
}

fn has_id(reply: &LoginReply) -> bool {
    reply.id.as_ref().and_then(EmployeeKey::from_value).is_some()
}

#[async_trait]
impl Backend for RestBackend {
    #[instrument(name = "backend_login", skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: &LoginReqDto) -> Result<LoginReply, BackendError> {
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(credentials)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(BackendError::Unauthorized),
            status if !status.is_success() => {
                // an unknown email comes back as a server error without an id
                let body = response.bytes().await?;
                match serde_json::from_slice::<LoginReply>(&body) {
                    Ok(reply) if !has_id(&reply) => {
                        info!(status = status.as_u16(), "Login error reply without id");
                        Err(BackendError::Unauthorized)
                    }
                    _ => Err(BackendError::Status(status.as_u16())),
                }
            }
            _ => Ok(response.json().await?),
        }
    }

    async fn employees(&self) -> Result<Vec<Employee>, BackendError> {
        self.fetch_collection("employee", EMPLOYEES_PATH).await
    }

    async fn attendance(&self) -> Result<Vec<AttendanceRecord>, BackendError> {
        self.fetch_collection("attendance", ATTENDANCE_PATH).await
    }

    async fn leaves(&self) -> Result<Vec<LeaveRecord>, BackendError> {
        self.fetch_collection("leave", LEAVES_PATH).await
    }
}
