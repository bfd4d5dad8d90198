//! HTTP "middleware" for checking the `Authorization: ApiKey <key>` header.

use hyper::{
    Body, Request, Response, StatusCode,
    header::{HeaderValue, WWW_AUTHENTICATE},
};
use tracing::{debug, warn};

use crate::sys_auth::config::AuthConfig;
use crate::sys_auth::core::{self, API_KEY_SCHEME, ApiKey, ApiKeyError};
use crate::sys_respond::handlers::respond_with_error;

#[derive(Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Authorized(ApiKey),
    Rejected(ApiKeyError),
    Forbidden,
}

/// Decide what to do with a request without building a response.
pub fn authorize(config: &AuthConfig, req: &Request<Body>) -> AuthOutcome {
    match core::extract_api_key(req.headers()) {
        Ok(key) if core::verify(config, &key) => AuthOutcome::Authorized(key),
        Ok(_) => AuthOutcome::Forbidden,
        Err(e) => AuthOutcome::Rejected(e),
    }
}

/// If the request carries an acceptable key, returns `None`.
/// Otherwise returns a 401 (missing or malformed header) or 403 (wrong key) response.
pub async fn handler_auth(config: &AuthConfig, req: &Request<Body>) -> Option<Response<Body>> {
    match authorize(config, req) {
        AuthOutcome::Authorized(_) => None,
        AuthOutcome::Rejected(e) => {
            debug!("rejecting {} {}: {}", req.method(), req.uri().path(), e);
            let mut resp = respond_with_error(StatusCode::UNAUTHORIZED, &e.to_string());
            resp.headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static(API_KEY_SCHEME));
            Some(resp)
        }
        AuthOutcome::Forbidden => {
            warn!("invalid api key for {} {}", req.method(), req.uri().path());
            Some(respond_with_error(StatusCode::FORBIDDEN, "invalid api key"))
        }
    }
}
