use crate::{
    api::{dashboard, navigation, report},
    auth::{handlers, middleware::session_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};

type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Limiter configurations, built once so every worker shares the same buckets.
#[derive(Clone)]
pub struct RateLimits {
    login: LimiterConfig,
    protected: LimiterConfig,
}

impl RateLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            login: build_limiter(config.rate_login_per_min),
            protected: build_limiter(config.rate_protected_per_min),
        }
    }
}

fn build_limiter(requests_per_min: u32) -> LimiterConfig {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .expect("period and burst size are non-zero")
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limits: &RateLimits) {
    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .wrap(Governor::new(&limits.login))
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/logout")
                    .wrap(Governor::new(&limits.login))
                    .route(web::post().to(handlers::logout)),
            ),
    );

    // Session-protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(session_middleware))
            .wrap(Governor::new(&limits.protected))
            .service(web::resource("/me").route(web::get().to(handlers::me)))
            .service(web::resource("/navigation").route(web::get().to(navigation::navigation)))
            .service(web::resource("/dashboard").route(web::get().to(dashboard::dashboard)))
            .service(
                web::scope("/reports").service(
                    web::resource("/attendance-leave")
                        .route(web::get().to(report::attendance_leave)),
                ),
            ),
    );
}

// LOGIN
//  └─ session cookie (ems_session) -> identity in the session store

// API REQUEST
//  └─ Cookie: ems_session=<id>  -> 401 when the session is gone

// LOGOUT
//  └─ store entry dropped, cookie expired, 303 -> /
