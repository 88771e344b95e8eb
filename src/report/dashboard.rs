use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::range::parse_record_date;
use crate::model::{
    attendance::AttendanceRecord,
    employee::Employee,
    leave_request::{LeaveRecord, LeaveStatus},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveCounts {
    /// every leave request, whatever its status
    pub applied: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

/// Figures for the cards on the admin home page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "totalEmployees": 24,
    "attendanceToday": 19,
    "leave": {"applied": 10, "approved": 6, "pending": 3, "rejected": 1},
    "approvedLeavesToday": 1
}))]
pub struct DashboardStats {
    pub total_employees: usize,
    pub attendance_today: usize,
    pub leave: LeaveCounts,
    /// approved requests that were applied for today
    pub approved_leaves_today: usize,
}

pub fn dashboard_stats(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    leave: &[LeaveRecord],
    today: NaiveDate,
) -> DashboardStats {
    let is_today = |raw: Option<&str>| raw.and_then(parse_record_date) == Some(today);

    let mut counts = LeaveCounts {
        applied: leave.len(),
        ..LeaveCounts::default()
    };
    for record in leave {
        match record.status {
            LeaveStatus::Approved => counts.approved += 1,
            LeaveStatus::Pending => counts.pending += 1,
            LeaveStatus::Rejected => counts.rejected += 1,
            LeaveStatus::Other => {}
        }
    }

    DashboardStats {
        total_employees: employees.len(),
        attendance_today: attendance
            .iter()
            .filter(|a| is_today(a.date.as_deref()))
            .count(),
        leave: counts,
        approved_leaves_today: leave
            .iter()
            .filter(|l| l.is_approved() && is_today(l.applied_at.as_deref()))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_the_home_page_cards() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
        let employees = vec![Employee::new(1, "A", "B"), Employee::new(2, "C", "D")];
        let attendance: Vec<AttendanceRecord> = serde_json::from_value(json!([
            {"empId": 1, "date": "2025-05-15"},
            {"empId": 2, "date": "2025-05-15T09:00:00"},
            {"empId": 2, "date": "2025-05-14"},
            {"empId": 1}
        ]))
        .unwrap();
        let leave: Vec<LeaveRecord> = serde_json::from_value(json!([
            {"empId": 1, "status": "APPROVED", "appliedAt": "2025-05-15"},
            {"empId": 1, "status": "APPROVED", "appliedAt": "2025-05-01"},
            {"empId": 2, "status": "PENDING", "appliedAt": "2025-05-15"},
            {"empId": 2, "status": "REJECTED"},
            {"empId": 2, "status": "WITHDRAWN"}
        ]))
        .unwrap();

        let stats = dashboard_stats(&employees, &attendance, &leave, today);

        assert_eq!(
            stats,
            DashboardStats {
                total_employees: 2,
                attendance_today: 2,
                leave: LeaveCounts {
                    applied: 5,
                    approved: 2,
                    pending: 1,
                    rejected: 1,
                },
                approved_leaves_today: 1,
            }
        );
    }

    #[test]
    fn empty_inputs_give_zeroes() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
        assert_eq!(dashboard_stats(&[], &[], &[], today), DashboardStats::default());
    }
}
