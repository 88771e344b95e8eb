use crate::{
    auth::auth::CurrentUser,
    backend::Backend,
    error::PortalError,
    report::{
        aggregate::{ReportTotals, Summary, aggregate, totals},
        range::ReportRange,
    },
};
use actix_web::{HttpResponse, web};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};
use utoipa::{IntoParams, ToSchema};

const NO_DATA_MESSAGE: &str = "No attendance or leave data available";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// today, week, month, year or all (default)
    pub range: Option<ReportRange>,
}

/// Sizes of the collections the report was computed from.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceCounts {
    pub employees: usize,
    pub attendance_records: usize,
    pub leave_records: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceLeaveReport {
    pub range: ReportRange,
    pub data: Vec<Summary>,
    pub totals: ReportTotals,
    pub source: SourceCounts,
    /// set when `data` is empty; the chart shows this instead of empty bars
    pub message: Option<String>,
}

/// Attendance vs leave per employee
#[utoipa::path(
    get,
    path = "/api/reports/attendance-leave",
    params(ReportQuery),
    responses(
        (status = 200, description = "Per-employee attendance and leave summary", body = AttendanceLeaveReport),
        (status = 401, description = "Not signed in"),
        (status = 403, description = "Admin only"),
        (status = 502, description = "EMS backend failure")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Report"
)]
#[instrument(name = "attendance_leave_report", skip(user, backend, query))]
pub async fn attendance_leave(
    user: CurrentUser,
    backend: web::Data<dyn Backend>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse, PortalError> {
    user.require_admin()?;
    let range = query.range.unwrap_or_default();

    let (employees, attendance, leave) =
        futures::try_join!(backend.employees(), backend.attendance(), backend.leaves()).map_err(
            |e| {
                error!(error = %e, "Failed to load report collections");
                PortalError::Backend(e)
            },
        )?;

    let source = SourceCounts {
        employees: employees.len(),
        attendance_records: attendance.len(),
        leave_records: leave.len(),
    };

    let today = Local::now().date_naive();
    let attendance = range.filter_attendance(&attendance, today);
    let leave = range.filter_leave(&leave, today);

    let data = aggregate(&employees, &attendance, &leave);
    debug!(%range, summaries = data.len(), "Report aggregated");

    Ok(HttpResponse::Ok().json(AttendanceLeaveReport {
        range,
        totals: totals(&data),
        message: data.is_empty().then(|| NO_DATA_MESSAGE.to_string()),
        data,
        source,
    }))
}
