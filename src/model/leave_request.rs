use serde::{Deserialize, Deserializer};
use serde_json::Value;
use strum_macros::{Display, EnumString};

use super::employee_ref::EmployeeRef;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    /// Any status the portal does not know about, including a missing one.
    #[default]
    Other,
}

/// Unknown, missing or non-string statuses become [`LeaveStatus::Other`]
/// instead of failing the whole record.
fn lenient_status<'de, D>(deserializer: D) -> Result<LeaveStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    #[serde(flatten)]
    pub reference: EmployeeRef,

    #[serde(default, deserialize_with = "lenient_status")]
    pub status: LeaveStatus,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub applied_at: Option<String>,
}

impl LeaveRecord {
    #[cfg(test)]
    pub fn new(reference: EmployeeRef, status: LeaveStatus) -> Self {
        Self {
            reference,
            status,
            ..Self::default()
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_known_statuses() {
        let leave: LeaveRecord =
            serde_json::from_value(json!({"empId": 1, "status": "APPROVED"})).unwrap();
        assert!(leave.is_approved());

        let leave: LeaveRecord =
            serde_json::from_value(json!({"empId": 1, "status": "REJECTED"})).unwrap();
        assert_eq!(leave.status, LeaveStatus::Rejected);
    }

    #[test]
    fn unknown_statuses_do_not_fail_the_record() {
        for status in [json!("CANCELLED"), json!("approved"), json!(3), json!(null)] {
            let leave: LeaveRecord =
                serde_json::from_value(json!({"empId": 1, "status": status})).unwrap();
            assert_eq!(leave.status, LeaveStatus::Other);
        }

        let leave: LeaveRecord = serde_json::from_value(json!({"empId": 1})).unwrap();
        assert_eq!(leave.status, LeaveStatus::Other);
    }
}
