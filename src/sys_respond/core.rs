//! JSON error bodies: no Hyper types here.

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

pub fn error_json(msg: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ErrorBody { error: msg })
}
