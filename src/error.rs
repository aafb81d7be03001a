use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to set up async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ServerError {
    pub fn bind(addr: SocketAddr) -> impl FnOnce(std::io::Error) -> Self {
        move |source| ServerError::Bind { addr, source }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
