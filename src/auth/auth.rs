use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures::future::{Ready, ready};

use crate::{
    error::PortalError,
    model::{identity::Identity, role::Role},
};

/// The identity behind the current request, placed in the request
/// extensions by the session middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub identity: Identity,
}

impl FromRequest for CurrentUser {
    type Error = PortalError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<CurrentUser>()
                .cloned()
                .ok_or(PortalError::Unauthenticated),
        )
    }
}

impl CurrentUser {
    pub fn role(&self) -> Option<Role> {
        self.identity.role()
    }

    pub fn require_admin(&self) -> Result<(), PortalError> {
        if self.role() == Some(Role::Admin) {
            Ok(())
        } else {
            Err(PortalError::Forbidden("Admin"))
        }
    }
}
