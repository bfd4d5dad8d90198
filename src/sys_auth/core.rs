//! Pure API-key logic: no Hyper bodies or responses here.

use std::fmt;

use hyper::{HeaderMap, header::AUTHORIZATION};
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::sys_auth::config::AuthConfig;

/// Scheme literal expected in front of the key.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// A key taken from an `Authorization: ApiKey <key>` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// keep keys out of logs
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Pull the key out of the `Authorization` header.
///
/// A missing or empty header is `NoAuthHeader`. Anything else that is not valid
/// UTF-8 of the form `ApiKey` whitespace key is `MalformedHeader`.
pub fn extract_api_key(headers: &HeaderMap) -> Result<ApiKey, ApiKeyError> {
    let raw = headers
        .get(AUTHORIZATION)
        .filter(|h| !h.is_empty())
        .ok_or(ApiKeyError::NoAuthHeader)?;
    let value = std::str::from_utf8(raw.as_bytes()).map_err(|_| ApiKeyError::MalformedHeader)?;

    let (scheme, key) = value
        .split_once(char::is_whitespace)
        .unwrap_or((value, ""));

    if scheme != API_KEY_SCHEME || key.is_empty() {
        return Err(ApiKeyError::MalformedHeader);
    }
    Ok(ApiKey::new(key))
}

/// Compare a provided key against the configured one.
///
/// With no key configured every well-formed key passes.
pub fn verify(config: &AuthConfig, provided: &ApiKey) -> bool {
    match config.expected_key() {
        Some(expected) => expected.as_bytes().ct_eq(provided.as_str().as_bytes()).into(),
        None => true,
    }
}
