use crate::{
    auth::auth::CurrentUser,
    backend::Backend,
    error::PortalError,
    report::dashboard::dashboard_stats,
};
use actix_web::{HttpResponse, web};
use chrono::Local;

/// Admin home page figures
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats),
        (status = 401, description = "Not signed in"),
        (status = 403, description = "Admin only"),
        (status = 502, description = "EMS backend failure")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Report"
)]
pub async fn dashboard(
    user: CurrentUser,
    backend: web::Data<dyn Backend>,
) -> Result<HttpResponse, PortalError> {
    user.require_admin()?;

    let (employees, attendance, leave) =
        futures::try_join!(backend.employees(), backend.attendance(), backend.leaves()).map_err(
            |e| {
                tracing::error!(error = %e, "Failed to load dashboard collections");
                PortalError::Backend(e)
            },
        )?;

    let stats = dashboard_stats(&employees, &attendance, &leave, Local::now().date_naive());
    Ok(HttpResponse::Ok().json(stats))
}
