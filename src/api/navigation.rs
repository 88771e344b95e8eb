use crate::{
    auth::auth::CurrentUser,
    model::role::Role,
    nav::{NavEntry, navigation as entries_for},
};
use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct NavigationResponse {
    pub role: Option<Role>,
    pub entries: Vec<NavEntry>,
}

/// Sidebar entries for the signed-in role
#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Entries visible to the current role; empty for unknown roles", body = NavigationResponse),
        (status = 401, description = "Not signed in")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Auth"
)]
pub async fn navigation(user: CurrentUser) -> impl Responder {
    let role = user.role();
    HttpResponse::Ok().json(NavigationResponse {
        role,
        entries: entries_for(role),
    })
}
