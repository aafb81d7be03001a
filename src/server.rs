use std::{convert::Infallible, net::SocketAddr, time::Duration};

use hyper::{body::Incoming, service::service_fn};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server::conn::auto,
};
use tokio::net::{TcpListener, TcpStream};
use tracing::Instrument as _;

use crate::{config::ServerConfig, error::Result, handler, listener};

const MIN_ACCEPT_BACKOFF: Duration = Duration::from_millis(5);
const MAX_ACCEPT_BACKOFF: Duration = Duration::from_secs(1);

/// Owns the listening socket for as long as it lives.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Must be called from within a tokio runtime.
    pub fn bind(config: &ServerConfig) -> Result<Self> {
        let listener = listener::bind(config)?;
        let listener = TcpListener::from_std(listener)?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections forever, one task per connection.
    ///
    /// Accept errors such as running out of file descriptors are not fatal:
    /// the loop sleeps with exponential backoff and tries again.
    pub async fn serve(self) -> Infallible {
        let mut backoff = AcceptBackoff::default();
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    backoff.reset();
                    spawn_connection(stream, peer);
                }
                Err(err) => {
                    let delay = backoff.next_delay();
                    tracing::warn!(
                        message = "Accept failed",
                        error = %err,
                        retry_in_ms = delay.as_millis() as u64
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

/// Binds `config.addr` and serves until the process dies.
pub async fn run(config: ServerConfig) -> Result<Infallible> {
    let server = Server::bind(&config)?;
    tracing::info!(
        message = "Accepting requests.",
        threads = config.worker_threads,
        addr = %server.local_addr()?
    );
    Ok(server.serve().await)
}

fn spawn_connection(stream: TcpStream, peer: SocketAddr) {
    let span = tracing::debug_span!("connection", peer = %peer);
    tokio::spawn(
        async move {
            tracing::debug!("Accepted connection");
            let builder = auto::Builder::new(TokioExecutor::new());
            let service = service_fn(handler::respond::<Incoming>);
            match builder
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                Ok(()) => tracing::debug!("Closing connection"),
                Err(err) => tracing::debug!(message = "Connection error", error = %err),
            }
        }
        .instrument(span),
    );
}

#[derive(Debug, Default)]
struct AcceptBackoff {
    current: Option<Duration>,
}

impl AcceptBackoff {
    fn next_delay(&mut self) -> Duration {
        let delay = match self.current {
            None => MIN_ACCEPT_BACKOFF,
            Some(previous) => (previous * 2).min(MAX_ACCEPT_BACKOFF),
        };
        self.current = Some(delay);
        delay
    }

    fn reset(&mut self) {
        self.current = None;
    }
}
