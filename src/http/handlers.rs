//! Route handlers.
//!
//! | Route                   | Normal                 | Overloaded              |
//! |-------------------------|------------------------|-------------------------|
//! | `GET /alive`            | 200 OK                 | 200 OK                  |
//! | `GET /ready`            | 200 OK FROM (if ready) | 503 BUSY FROM           |
//! | `GET /`                 | 200 SOMERESPONSE FROM  | 503 ERROR FROM, delayed |
//! | `POST /fakeerrormodeon` | 200 OK FROM            | 200 OK FROM             |
//! | `POST /fakeerrormodeoff`| 200 OK FROM            | 200 OK FROM             |

use axum::extract::{ConnectInfo, State};
use axum::response::{IntoResponse, Response};
use tokio::time::Instant;

use crate::health::Mode;
use crate::http::connect::ConnectionAddrs;
use crate::http::response::Reply;
use crate::http::server::AppState;

/// Liveness probe. Never fails while the process runs, whatever the mode.
pub async fn alive() -> Response {
    tracing::info!(route = "/alive", "Liveness probe");
    Reply::Ok.into_response()
}

/// Readiness probe for circuit breakers and load balancers.
pub async fn ready(
    State(state): State<AppState>,
    ConnectInfo(conn): ConnectInfo<ConnectionAddrs>,
) -> Response {
    tracing::info!(route = "/ready", peer_addr = %conn.peer, "Readiness probe");

    let reply = if state.service.accepts_traffic() {
        Reply::Ok
    } else {
        Reply::Busy
    };
    reply.from_addr(conn.served_ip())
}

/// Simulated work.
///
/// While overloaded the 503 is sent once the configured delay has elapsed
/// since receipt. The decision is taken at receipt: switching overload off
/// during the wait does not turn the pending reply into a success.
pub async fn work(
    State(state): State<AppState>,
    ConnectInfo(conn): ConnectInfo<ConnectionAddrs>,
) -> Response {
    let received_at = Instant::now();
    tracing::info!(route = "/", peer_addr = %conn.peer, "Work request");

    if !state.service.is_overloaded() {
        return Reply::SomeResponse.from_addr(conn.served_ip());
    }

    let deadline = received_at + state.overload_delay;
    tracing::debug!(
        peer_addr = %conn.peer,
        delay = ?state.overload_delay,
        "Overloaded, holding request"
    );
    tokio::time::sleep_until(deadline).await;

    Reply::Error.from_addr(conn.served_ip())
}

pub async fn fake_error_mode_on(
    State(state): State<AppState>,
    ConnectInfo(conn): ConnectInfo<ConnectionAddrs>,
) -> Response {
    tracing::info!(route = "/fakeerrormodeon", peer_addr = %conn.peer, "Overload requested");
    state.service.set_mode(Mode::Overloaded);
    Reply::Ok.from_addr(conn.served_ip())
}

pub async fn fake_error_mode_off(
    State(state): State<AppState>,
    ConnectInfo(conn): ConnectInfo<ConnectionAddrs>,
) -> Response {
    tracing::info!(route = "/fakeerrormodeoff", peer_addr = %conn.peer, "Recovery requested");
    state.service.set_mode(Mode::Normal);
    Reply::Ok.from_addr(conn.served_ip())
}
