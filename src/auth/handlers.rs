use crate::{
    auth::{auth::CurrentUser, session::IdentityContext},
    backend::{Backend, BackendError, LoginReply},
    config::Config,
    error::PortalError,
    model::{employee_ref::EmployeeKey, identity::Identity},
    models::{IdentityResponse, LoginReqDto, LoginResponse},
};
use actix_web::{
    HttpRequest, HttpResponse,
    cookie::{Cookie, SameSite},
    http::header,
    web,
};
use serde_json::json;
use tracing::{debug, error, info, instrument, warn};

/// Unauthenticated landing page; logout always ends here.
pub const LANDING_PATH: &str = "/";

fn display_name(reply: &LoginReply, user_id: &EmployeeKey) -> String {
    if let Some(name) = reply.name.as_deref().filter(|n| !n.trim().is_empty()) {
        return name.to_string();
    }
    match (reply.fname.as_deref(), reply.lname.as_deref()) {
        (Some(f), Some(l)) => return format!("{f} {l}"),
        (Some(f), None) => return f.to_string(),
        _ => {}
    }
    reply
        .email
        .clone()
        .unwrap_or_else(|| user_id.to_string())
}

fn session_cookie(config: &Config, value: String) -> Cookie<'static> {
    Cookie::build(config.session_cookie.clone(), value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Sign in
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Signed in, session cookie set", body = LoginResponse),
        (status = 400, description = "Email or password missing", body = Object, example = json!({
            "error": "Email and password are required"
        })),
        (status = 401, description = "Invalid credentials", body = Object, example = json!({
            "error": "Invalid Credentials"
        })),
        (status = 403, description = "Unknown role, session cookie still set", body = Object, example = json!({
            "error": "Unknown role"
        })),
        (status = 502, description = "EMS backend failure")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(req, payload, backend, sessions, config),
    fields(email = %payload.email)
)]
pub async fn login(
    req: HttpRequest,
    payload: web::Json<LoginReqDto>,
    backend: web::Data<dyn Backend>,
    sessions: web::Data<IdentityContext>,
    config: web::Data<Config>,
) -> Result<HttpResponse, PortalError> {
    info!("Login request received");

    // 1️⃣ Basic validation
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        info!("Validation failed: empty email or password");
        return Err(PortalError::BadRequest("Email and password are required"));
    }

    // 2️⃣ Credential exchange
    debug!("Exchanging credentials with backend");
    let reply = backend.login(&payload).await.map_err(|e| {
        match &e {
            BackendError::Unauthorized => info!("Invalid credentials: rejected by backend"),
            other => error!(error = %other, "Backend login failed"),
        }
        PortalError::from(e)
    })?;

    let Some(user_id) = reply.id.as_ref().and_then(EmployeeKey::from_value) else {
        info!("Invalid credentials: backend reply carries no id");
        return Err(PortalError::InvalidCredentials);
    };

    // 3️⃣ Persist identity. This happens before the role check, so an
    //    unknown role still leaves a session behind.
    let identity = Identity {
        user_id: user_id.to_string(),
        email: reply.email.clone(),
        role_name: reply.role.clone(),
        display_name: display_name(&reply, &user_id),
    };
    let role = identity.role();
    let previous = req
        .cookie(&config.session_cookie)
        .map(|c| c.value().to_string());
    if previous.is_some() {
        debug!("Replacing the session carried by the request");
        sessions.sign_out(previous.as_deref()).await;
    }
    let session_id = sessions.sign_in(identity.clone()).await;
    let cookie = session_cookie(&config, session_id);

    // 4️⃣ Route by role
    match role {
        Some(role) => {
            info!(user_id = %identity.user_id, role = %role, "Login successful");
            Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
                id: identity.user_id,
                email: identity.email,
                role,
                display_name: identity.display_name,
                redirect: role.landing_path().to_string(),
            }))
        }
        None => {
            warn!(role = ?identity.role_name, "Login with unknown role");
            Ok(HttpResponse::Forbidden()
                .cookie(cookie)
                .json(json!({"error": "Unknown role"})))
        }
    }
}

/// Sign out
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 303, description = "Session cleared, redirected to the landing page")
    ),
    tag = "Auth"
)]
pub async fn logout(
    req: HttpRequest,
    sessions: web::Data<IdentityContext>,
    config: web::Data<Config>,
) -> HttpResponse {
    let session_id = req
        .cookie(&config.session_cookie)
        .map(|c| c.value().to_string());

    // idempotent: no cookie or an already cleared session is fine
    sessions.sign_out(session_id.as_deref()).await;
    debug!(had_session = session_id.is_some(), "Logout");

    let mut removal = session_cookie(&config, String::new());
    removal.make_removal();

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LANDING_PATH))
        .cookie(removal)
        .finish()
}

/// Current identity
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "The signed-in identity", body = IdentityResponse),
        (status = 401, description = "Not signed in")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Auth"
)]
pub async fn me(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(IdentityResponse::from(&user.identity))
}
