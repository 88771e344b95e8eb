use crate::api::navigation::NavigationResponse;
use crate::api::report::{AttendanceLeaveReport, SourceCounts};
use crate::model::role::Role;
use crate::models::{IdentityResponse, LoginReqDto, LoginResponse};
use crate::nav::NavEntry;
use crate::report::aggregate::{ReportTotals, Summary};
use crate::report::dashboard::{DashboardStats, LeaveCounts};
use crate::report::range::ReportRange;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EMS Portal API",
        version = "1.0.0",
        description = r#"
## Employee Management System portal

The portal sits between the EMS web pages and the EMS REST backend.

### 🔹 Key Features
- **Sign in / sign out**
  - Credentials are checked by the EMS backend, the identity is kept in a server-side session
- **Role-based navigation**
  - Admins and employees get their own sidebar; unknown roles get none
- **Reporting**
  - Attendance vs leave per employee, with today / week / month / year windows
  - Home page figures: head count, today's attendance, leave by status

### 🔐 Security
Protected endpoints need the `ems_session` cookie set by `/auth/login`.
Reports are restricted to **ADMIN**.

---
Built with **Rust**, **Actix Web**, **reqwest**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::logout,
        crate::auth::handlers::me,

        crate::api::navigation::navigation,

        crate::api::report::attendance_leave,
        crate::api::dashboard::dashboard
    ),
    components(
        schemas(
            LoginReqDto,
            LoginResponse,
            IdentityResponse,
            Role,
            NavEntry,
            NavigationResponse,
            ReportRange,
            Summary,
            ReportTotals,
            SourceCounts,
            AttendanceLeaveReport,
            LeaveCounts,
            DashboardStats
        )
    ),
    modifiers(&SessionCookieAddon),
    tags(
        (name = "Auth", description = "Sign in, sign out and navigation"),
        (name = "Report", description = "Attendance and leave reporting"),
    )
)]
pub struct ApiDoc;

struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("ems_session"))),
            );
        }
    }
}
