use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::{
    attendance::AttendanceRecord, employee::Employee, employee_ref::EmployeeKey,
    leave_request::LeaveRecord,
};

/// One bar group of the attendance vs leave chart.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "name": "John Doe",
    "attendance": 12,
    "leave": 1,
    "totalLeave": 2,
    "employeeId": 1
}))]
pub struct Summary {
    pub name: String,
    /// attendance days on record
    pub attendance: usize,
    /// approved leave requests
    pub leave: usize,
    /// leave requests in any status
    pub total_leave: usize,
    /// the employee id exactly as the roster sent it
    #[schema(value_type = Object)]
    pub employee_id: Value,
}

impl Summary {
    fn has_activity(&self) -> bool {
        self.attendance > 0 || self.leave > 0 || self.total_leave > 0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub attendance_days: usize,
    pub approved_leave_days: usize,
    pub employees_with_data: usize,
}

#[derive(Default)]
struct Counts {
    attendance: usize,
    approved: usize,
    total_leave: usize,
}

/// Joins the roster with attendance and leave records.
///
/// Each record is resolved to an employee once; records that resolve to no
/// roster entry are ignored. Employees without any activity are dropped and
/// the remaining summaries keep roster order.
pub fn aggregate(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    leave: &[LeaveRecord],
) -> Vec<Summary> {
    let mut counts: HashMap<EmployeeKey, Counts> = HashMap::new();

    for key in attendance.iter().filter_map(|a| a.reference.resolve()) {
        counts.entry(key).or_default().attendance += 1;
    }

    for record in leave {
        let Some(key) = record.reference.resolve() else {
            continue;
        };
        let entry = counts.entry(key).or_default();
        entry.total_leave += 1;
        if record.is_approved() {
            entry.approved += 1;
        }
    }

    employees
        .iter()
        .filter_map(|employee| {
            let raw_id = employee.raw_id()?;
            let key = EmployeeKey::from_value(raw_id)?;
            let c = counts.get(&key)?;

            let summary = Summary {
                name: employee.full_name(),
                attendance: c.attendance,
                leave: c.approved,
                total_leave: c.total_leave,
                employee_id: raw_id.clone(),
            };
            summary.has_activity().then_some(summary)
        })
        .collect()
}

pub fn totals(summaries: &[Summary]) -> ReportTotals {
    summaries.iter().fold(ReportTotals::default(), |mut acc, s| {
        acc.attendance_days += s.attendance;
        acc.approved_leave_days += s.leave;
        acc.employees_with_data += 1;
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{employee_ref::EmployeeRef, leave_request::LeaveStatus};
    use serde_json::json;

    fn attendance_for(id: Value) -> AttendanceRecord {
        AttendanceRecord::for_employee(EmployeeRef::direct(id))
    }

    fn leave_for(id: Value, status: LeaveStatus) -> LeaveRecord {
        LeaveRecord::new(EmployeeRef::direct(id), status)
    }

    #[test]
    fn joins_roster_with_both_collections() {
        let roster = vec![Employee::new(1, "A", "B")];
        let attendance = vec![attendance_for(json!(1))];
        let leave = vec![leave_for(json!(1), LeaveStatus::Approved)];

        let summaries = aggregate(&roster, &attendance, &leave);

        assert_eq!(
            summaries,
            vec![Summary {
                name: "A B".into(),
                attendance: 1,
                leave: 1,
                total_leave: 1,
                employee_id: json!(1),
            }]
        );
        assert_eq!(
            serde_json::to_value(&summaries[0]).unwrap(),
            json!({"name": "A B", "attendance": 1, "leave": 1, "totalLeave": 1, "employeeId": 1})
        );
    }

    #[test]
    fn empty_records_give_no_summaries() {
        let roster = vec![Employee::new(1, "A", "B"), Employee::new(2, "C", "D")];
        assert!(aggregate(&roster, &[], &[]).is_empty());
        assert!(aggregate(&[], &[attendance_for(json!(1))], &[]).is_empty());
    }

    #[test]
    fn attendance_only_employee_has_zero_leave() {
        let roster = vec![Employee::new(4, "Ann", "Lee")];
        let summaries = aggregate(&roster, &[attendance_for(json!(4))], &[]);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].attendance, 1);
        assert_eq!(summaries[0].leave, 0);
        assert_eq!(summaries[0].total_leave, 0);
    }

    #[test]
    fn only_approved_leave_counts_as_leave() {
        let roster = vec![Employee::new(1, "A", "B")];
        let leave = vec![
            leave_for(json!(1), LeaveStatus::Approved),
            leave_for(json!(1), LeaveStatus::Pending),
            leave_for(json!(1), LeaveStatus::Rejected),
            leave_for(json!(1), LeaveStatus::Other),
        ];

        let summaries = aggregate(&roster, &[], &leave);
        assert_eq!(summaries[0].leave, 1);
        assert_eq!(summaries[0].total_leave, 4);
        assert_eq!(summaries[0].attendance, 0);
    }

    #[test]
    fn ids_match_across_number_and_string() {
        let roster = vec![Employee::new(7, "A", "B")];
        let summaries = aggregate(&roster, &[attendance_for(json!("7"))], &[]);
        assert_eq!(summaries.len(), 1);

        let roster = vec![Employee::new("7", "A", "B")];
        let summaries = aggregate(&roster, &[attendance_for(json!(7))], &[]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].employee_id, json!("7"));
    }

    #[test]
    fn records_for_unknown_employees_are_ignored() {
        let roster = vec![Employee::new(1, "A", "B")];
        let attendance = vec![attendance_for(json!(1)), attendance_for(json!(99))];
        let leave = vec![leave_for(json!(42), LeaveStatus::Approved)];

        let summaries = aggregate(&roster, &attendance, &leave);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].attendance, 1);
        assert_eq!(summaries[0].total_leave, 0);
    }

    #[test]
    fn mixed_reference_shapes_count_together() {
        let roster = vec![Employee::new(3, "A", "B")];
        let attendance: Vec<AttendanceRecord> = serde_json::from_value(json!([
            {"empId": 3},
            {"employeeId": "3"},
            {"employee": {"empId": 3}},
            {"employee": {"id": "3"}},
            {"date": "2025-01-01"}
        ]))
        .unwrap();

        let summaries = aggregate(&roster, &attendance, &[]);
        assert_eq!(summaries[0].attendance, 4);
    }

    #[test]
    fn inactive_employees_are_dropped_and_order_is_kept() {
        let roster = vec![
            Employee::new(3, "C", "C"),
            Employee::new(1, "A", "A"),
            Employee::new(2, "B", "B"),
        ];
        let attendance = vec![attendance_for(json!(1)), attendance_for(json!(3))];

        let names: Vec<_> = aggregate(&roster, &attendance, &[])
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["C C", "A A"]);
    }

    #[test]
    fn employees_without_id_never_match() {
        let roster: Vec<Employee> =
            serde_json::from_value(json!([{"fname": "No", "lname": "Id"}])).unwrap();
        let attendance: Vec<AttendanceRecord> =
            serde_json::from_value(json!([{"date": "2025-01-01"}])).unwrap();

        assert!(aggregate(&roster, &attendance, &[]).is_empty());
    }

    #[test]
    fn totals_sum_the_chart() {
        let roster = vec![Employee::new(1, "A", "B"), Employee::new(2, "C", "D")];
        let attendance = vec![
            attendance_for(json!(1)),
            attendance_for(json!(1)),
            attendance_for(json!(2)),
        ];
        let leave = vec![
            leave_for(json!(2), LeaveStatus::Approved),
            leave_for(json!(2), LeaveStatus::Pending),
        ];

        let summaries = aggregate(&roster, &attendance, &leave);
        assert_eq!(
            totals(&summaries),
            ReportTotals {
                attendance_days: 3,
                approved_leave_days: 1,
                employees_with_data: 2,
            }
        );
        assert_eq!(totals(&[]), ReportTotals::default());
    }
}
