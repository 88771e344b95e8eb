use anyhow::{Context, Result, anyhow};
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// Base URL of the EMS REST backend, e.g. `http://localhost:8080`
    pub backend_url: String,

    // Sessions
    pub session_cookie: String,
    pub session_ttl_secs: u64,
    pub session_capacity: u64,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_protected_per_min: u32,

    pub api_prefix: String,
}

/// Reads `key`, falling back to `default` when unset. A set but unparseable
/// value is an error rather than a silent fallback.
fn var_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key} has an invalid value {raw:?}: {e}")),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_addr: env::var("SERVER_ADDR").context("SERVER_ADDR must be set")?,
            backend_url: env::var("BACKEND_URL").context("BACKEND_URL must be set")?,

            session_cookie: var_or("SESSION_COOKIE", "ems_session".to_string())?,
            session_ttl_secs: var_or("SESSION_TTL_SECS", 86_400)?, // default 24h idle
            session_capacity: var_or("SESSION_CAPACITY", 10_000)?,

            rate_login_per_min: var_or("RATE_LOGIN_PER_MIN", 60)?,
            rate_protected_per_min: var_or("RATE_PROTECTED_PER_MIN", 1000)?,

            api_prefix: var_or("API_PREFIX", "/api".to_string())?,
        })
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            server_addr: "127.0.0.1:0".into(),
            backend_url: "http://backend.test".into(),
            session_cookie: "ems_session".into(),
            session_ttl_secs: 60,
            session_capacity: 100,
            rate_login_per_min: 1000,
            rate_protected_per_min: 1000,
            api_prefix: "/api".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_or_parses_and_falls_back() {
        // keys unique to this test so parallel tests do not interfere
        unsafe {
            env::set_var("EMS_PORTAL_TEST_NUMBER", " 42 ");
            env::set_var("EMS_PORTAL_TEST_BAD", "forty-two");
            env::remove_var("EMS_PORTAL_TEST_UNSET");
        }

        assert_eq!(var_or("EMS_PORTAL_TEST_NUMBER", 7u32).unwrap(), 42);
        assert_eq!(var_or("EMS_PORTAL_TEST_UNSET", 7u32).unwrap(), 7);
        assert!(var_or("EMS_PORTAL_TEST_BAD", 7u32).is_err());
    }
}
