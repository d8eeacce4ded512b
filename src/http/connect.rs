//! Per-connection address capture.
//!
//! Replies name the address that served them. The local socket address is
//! read once when the connection is accepted; the peer address is kept as a
//! fallback for sockets that cannot report their local end.

use std::net::{IpAddr, SocketAddr};

use axum::extract::connect_info::Connected;
use axum::serve::IncomingStream;
use tokio::net::TcpListener;

/// Addresses of both ends of an accepted connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionAddrs {
    pub local: Option<SocketAddr>,
    pub peer: SocketAddr,
}

impl ConnectionAddrs {
    pub fn new(local: SocketAddr, peer: SocketAddr) -> Self {
        Self {
            local: Some(local),
            peer,
        }
    }

    /// IP attributed to this connection in reply bodies.
    pub fn served_ip(&self) -> IpAddr {
        self.local.unwrap_or(self.peer).ip()
    }
}

impl Connected<IncomingStream<'_, TcpListener>> for ConnectionAddrs {
    fn connect_info(stream: IncomingStream<'_, TcpListener>) -> Self {
        let peer = *stream.remote_addr();
        let local = match stream.io().local_addr() {
            Ok(addr) => Some(addr),
            Err(e) => {
                tracing::warn!(peer_addr = %peer, error = %e, "Local address unavailable");
                None
            }
        };
        Self { local, peer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn served_ip_prefers_local_end() {
        let conn = ConnectionAddrs::new(
            "10.0.0.5:80".parse().unwrap(),
            "192.168.1.20:51234".parse().unwrap(),
        );
        assert_eq!(conn.served_ip().to_string(), "10.0.0.5");
    }

    #[test]
    fn served_ip_falls_back_to_peer() {
        let conn = ConnectionAddrs {
            local: None,
            peer: "192.168.1.20:51234".parse().unwrap(),
        };
        assert_eq!(conn.served_ip().to_string(), "192.168.1.20");
    }
}
