use serde::Deserialize;
use serde_json::{Number, Value};

/// Employee identifier in its normalized string form.
///
/// The EMS backend is not consistent about id types: the same employee can
/// show up as `7`, `7.0` or `"7"` depending on which collection it came from.
/// All of them normalize to `"7"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeKey(String);

impl EmployeeKey {
    /// Normalizes a raw JSON id. Returns `None` for values that carry no id:
    /// `null`, `0`, `""`, booleans, arrays and objects.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => normalize_number(n).map(Self),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize_number(n: &Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }

    let f = n.as_f64()?;
    if f == 0.0 || !f.is_finite() {
        return None;
    }
    // integral floats print without the fraction, 7.0 -> "7"
    if f.fract() == 0.0 && f.abs() < 1e15 {
        Some((f as i64).to_string())
    } else {
        Some(f.to_string())
    }
}

/// Reference from a record to the employee it belongs to.
///
/// Records arrive in three shapes: a direct `empId`, an alternate
/// `employeeId`, or a nested `employee` object carrying `empId` or `id`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    #[serde(default)]
    pub emp_id: Option<Value>,

    #[serde(default)]
    pub employee_id: Option<Value>,

    #[serde(default)]
    pub employee: Option<Value>,
}

impl EmployeeRef {
    #[cfg(test)]
    pub fn direct(id: impl Into<Value>) -> Self {
        Self {
            emp_id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Resolves the referenced employee, trying `empId`, `employeeId`,
    /// `employee.empId` and `employee.id` in that order. The first shape that
    /// yields an id wins.
    pub fn resolve(&self) -> Option<EmployeeKey> {
        let nested = self.employee.as_ref();

        [
            self.emp_id.as_ref(),
            self.employee_id.as_ref(),
            nested.and_then(|e| e.get("empId")),
            nested.and_then(|e| e.get("id")),
        ]
        .into_iter()
        .flatten()
        .find_map(EmployeeKey::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(s: &str) -> Option<EmployeeKey> {
        Some(EmployeeKey(s.to_string()))
    }

    #[test]
    fn numbers_and_strings_normalize_to_the_same_key() {
        assert_eq!(EmployeeKey::from_value(&json!(7)), key("7"));
        assert_eq!(EmployeeKey::from_value(&json!("7")), key("7"));
        assert_eq!(EmployeeKey::from_value(&json!(7.0)), key("7"));
        assert_eq!(EmployeeKey::from_value(&json!(7.5)), key("7.5"));
        assert_eq!(EmployeeKey::from_value(&json!("EMP-7")), key("EMP-7"));
    }

    #[test]
    fn empty_values_carry_no_key() {
        for value in [json!(null), json!(0), json!(""), json!(false), json!([1]), json!({"id": 1})] {
            assert_eq!(EmployeeKey::from_value(&value), None, "{value}");
        }
    }

    #[test]
    fn resolves_every_reference_shape() {
        let shapes = [
            json!({"empId": 3}),
            json!({"employeeId": "3"}),
            json!({"employee": {"empId": 3, "fname": "Ann"}}),
            json!({"employee": {"id": 3}}),
        ];

        for shape in shapes {
            let reference: EmployeeRef = serde_json::from_value(shape.clone()).unwrap();
            assert_eq!(reference.resolve(), key("3"), "{shape}");
        }
    }

    #[test]
    fn direct_id_takes_priority_over_nested() {
        let reference: EmployeeRef = serde_json::from_value(json!({
            "empId": 1,
            "employeeId": 2,
            "employee": {"empId": 3, "id": 4}
        }))
        .unwrap();
        assert_eq!(reference.resolve(), key("1"));
    }

    #[test]
    fn falls_through_empty_shapes() {
        let reference: EmployeeRef = serde_json::from_value(json!({
            "empId": null,
            "employeeId": "",
            "employee": {"empId": 0, "id": 9}
        }))
        .unwrap();
        assert_eq!(reference.resolve(), key("9"));
    }

    #[test]
    fn missing_or_malformed_references_resolve_to_nothing() {
        let cases = [json!({}), json!({"employee": 12}), json!({"employee": "x"})];
        for case in cases {
            let reference: EmployeeRef = serde_json::from_value(case).unwrap();
            assert_eq!(reference.resolve(), None);
        }
    }
}
