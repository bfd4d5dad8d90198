//! HTTP glue: turn an error message into a JSON `Response<Body>`.

use hyper::{Body, Response, StatusCode, header::CONTENT_TYPE};
use tracing::error;

use crate::sys_respond::core;

pub fn respond_with_error(status: StatusCode, msg: &str) -> Response<Body> {
    if status.is_server_error() {
        error!("responding with {}: {}", status, msg);
    }
    let body = match core::error_json(msg) {
        Ok(j) => j,
        Err(e) => {
            error!("json error: {}", e);
            return plain(StatusCode::INTERNAL_SERVER_ERROR, "JSON serialization error");
        }
    };
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| plain(status, msg))
}

fn plain(status: StatusCode, msg: &str) -> Response<Body> {
    let mut resp = Response::new(Body::from(msg.to_string()));
    *resp.status_mut() = status;
    resp
}
