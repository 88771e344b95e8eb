use crate::auth::auth::CurrentUser;
use crate::auth::session::IdentityContext;
use crate::config::Config;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
};
use serde_json::json;
use tracing::debug;

/// Rejects requests that do not carry a live session cookie.
pub async fn session_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<Data<Config>>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?;
    let sessions = req
        .app_data::<Data<IdentityContext>>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Session store missing"))?;

    let session_id = match req.cookie(&config.session_cookie) {
        Some(cookie) => cookie.value().to_string(),
        None => {
            let resp = HttpResponse::Unauthorized().json(json!({"error": "Not signed in"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
    };

    let identity = match sessions.current(&session_id).await {
        Some(identity) => identity,
        None => {
            debug!("Session cookie without a live session");
            let resp = HttpResponse::Unauthorized()
                .json(json!({"error": "Session expired or signed out"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
    };

    debug!(user_id = %identity.user_id, "Session resolved");
    req.extensions_mut().insert(CurrentUser { identity });

    next.call(req).await
}
