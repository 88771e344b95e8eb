use serde::Deserialize;
use serde_json::Value;

use super::employee_ref::EmployeeKey;

/// Roster entry as served by `GET /api/employee/employees`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub emp_id: Option<Value>,

    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub fname: Option<String>,

    #[serde(default)]
    pub lname: Option<String>,
}

impl Employee {
    #[cfg(test)]
    pub fn new(emp_id: impl Into<Value>, fname: &str, lname: &str) -> Self {
        Self {
            emp_id: Some(emp_id.into()),
            fname: Some(fname.to_string()),
            lname: Some(lname.to_string()),
            ..Self::default()
        }
    }

    /// The raw identifier this employee is keyed by: `empId`, falling back to `id`.
    pub fn raw_id(&self) -> Option<&Value> {
        [self.emp_id.as_ref(), self.id.as_ref()]
            .into_iter()
            .flatten()
            .find(|v| EmployeeKey::from_value(v).is_some())
    }

    pub fn key(&self) -> Option<EmployeeKey> {
        self.raw_id().and_then(EmployeeKey::from_value)
    }

    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.fname.as_deref().unwrap_or_default(),
            self.lname.as_deref().unwrap_or_default()
        )
    }
}
