//! `Authorization: ApiKey <key>` handling for hyper services.

pub mod sys_auth;
pub mod sys_logging;
pub mod sys_respond;

pub use sys_auth::config::AuthConfig;
pub use sys_auth::core::{ApiKey, ApiKeyError, extract_api_key, verify};
pub use sys_auth::handlers::{AuthOutcome, authorize, handler_auth};
pub use sys_logging::init_tracing;
pub use sys_respond::handlers::respond_with_error;
