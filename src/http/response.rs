//! Reply vocabulary.
//!
//! Every route answers with a fixed word, optionally followed by
//! `FROM <address>`. The status code is tied to the word.

use std::net::IpAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// A fixed reply kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// 200, healthy or acknowledged.
    Ok,
    /// 503, not accepting traffic.
    Busy,
    /// 200, the simulated work result.
    SomeResponse,
    /// 503, the simulated overload failure.
    Error,
}

impl Reply {
    pub fn status(self) -> StatusCode {
        match self {
            Reply::Ok | Reply::SomeResponse => StatusCode::OK,
            Reply::Busy | Reply::Error => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            Reply::Ok => "OK",
            Reply::Busy => "BUSY",
            Reply::SomeResponse => "SOMERESPONSE",
            Reply::Error => "ERROR",
        }
    }

    /// Body naming the address that served the request.
    pub fn body_from(self, addr: IpAddr) -> String {
        format!("{} FROM {}", self.word(), addr)
    }

    /// Response carrying [`Reply::body_from`].
    pub fn from_addr(self, addr: IpAddr) -> Response {
        (self.status(), self.body_from(addr)).into_response()
    }
}

/// Bare reply without an address suffix (used by the liveness probe).
impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status(), self.word()).into_response()
    }
}
