use serde::Deserialize;

use super::employee_ref::EmployeeRef;

/// One attendance day for one employee.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(flatten)]
    pub reference: EmployeeRef,

    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(default)]
    pub date: Option<String>,
}

#[cfg(test)]
impl AttendanceRecord {
    pub fn for_employee(reference: EmployeeRef) -> Self {
        Self {
            reference,
            ..Self::default()
        }
    }
}
