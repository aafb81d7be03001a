use std::net::TcpListener;

use socket2::{Domain, Protocol, Socket, Type};

use crate::{
    config::ServerConfig,
    error::{Result, ServerError},
};

/// Acquires the listening socket for `config.addr`.
///
/// Only `SO_REUSEADDR` is set, never `SO_REUSEPORT`: a second process asking
/// for a port that is already listening gets `EADDRINUSE`.
/// The returned listener is non-blocking, ready to be handed to tokio.
pub fn bind(config: &ServerConfig) -> Result<TcpListener> {
    let addr = config.addr;
    let socket = Socket::new(
        Domain::for_address(addr),
        Type::STREAM,
        Some(Protocol::TCP),
    )
    .map_err(ServerError::bind(addr))?;
    socket
        .set_reuse_address(true)
        .map_err(ServerError::bind(addr))?;
    socket
        .bind(&addr.into())
        .map_err(ServerError::bind(addr))?;
    socket
        .listen(config.backlog)
        .map_err(ServerError::bind(addr))?;
    socket
        .set_nonblocking(true)
        .map_err(ServerError::bind(addr))?;

    let listener: TcpListener = socket.into();
    tracing::debug!(message = "Bound listening socket", addr = %addr, backlog = config.backlog);
    Ok(listener)
}
