use std::convert::Infallible;

use bytes::Bytes;
use http_body_util::Full;
use hyper::{header, Request, Response};

pub const RESPONSE_BODY: &[u8] = b"Success!\n";
pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Answers every request the same way. Method, path, headers and body are
/// never looked at, so the body type is left generic.
pub async fn respond<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible> {
    tracing::debug!(method = %req.method(), path = req.uri().path(), "Responding");
    Ok(static_response())
}

pub fn static_response() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from_static(RESPONSE_BODY)));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(CONTENT_TYPE),
    );
    response
}
