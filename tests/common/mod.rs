use std::net::SocketAddr;

use bytes::Bytes;
use http_body_util::{BodyExt as _, Full};
use hyper::{HeaderMap, Request, StatusCode};
use hyper_util::rt::TokioIo;
use static_responder::{Server, ServerConfig};
use tokio::{net::TcpStream, task::JoinHandle};

pub const BODY: &[u8] = b"Success!\n";

pub struct Running {
    pub addr: SocketAddr,
    handle: JoinHandle<std::convert::Infallible>,
}

impl Drop for Running {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn start() -> anyhow::Result<Running> {
    let config = ServerConfig::default().with_addr("127.0.0.1:0".parse()?);
    let server = Server::bind(&config)?;
    let addr = server.local_addr()?;
    let handle = tokio::spawn(server.serve());
    Ok(Running { addr, handle })
}

#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub async fn collect(response: hyper::Response<hyper::body::Incoming>) -> anyhow::Result<Reply> {
    let (parts, body) = response.into_parts();
    let body = body.collect().await?.to_bytes();
    Ok(Reply {
        status: parts.status,
        headers: parts.headers,
        body,
    })
}

/// Sends one request over a fresh HTTP/1.1 connection.
pub async fn send(addr: SocketAddr, req: Request<Full<Bytes>>) -> anyhow::Result<Reply> {
    let stream = TcpStream::connect(addr).await?;
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream)).await?;
    tokio::spawn(conn);
    let response = sender.send_request(req).await?;
    collect(response).await
}

pub fn request(method: &str, path: &str, body: impl Into<Bytes>) -> anyhow::Result<Request<Full<Bytes>>> {
    Ok(Request::builder()
        .method(method)
        .uri(path)
        .header(hyper::header::HOST, "localhost")
        .body(Full::new(body.into()))?)
}
