//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → connect.rs (capture local/peer address at accept)
//!     → server.rs (Axum setup, middleware)
//!     → handlers.rs (read/flip ServiceState)
//!     → response.rs (status + "<WORD> FROM <addr>")
//!     → Send to client
//! ```

pub mod connect;
pub mod handlers;
pub mod response;
pub mod server;

pub use connect::ConnectionAddrs;
pub use response::Reply;
pub use server::{build_router, AppState, MockServer};
