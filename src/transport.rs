use std::io::Read;

use crate::error::Error;
use crate::signer::SignedRequest;

/// A wire response with the body fully read.
#[derive(Clone, Debug)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Dispatches signed requests over the network.
///
/// The signing core performs no i/o itself; an implementation of this trait
/// owns connection handling and any retry policy. The two headers of the
/// request must be attached exactly as given.
pub trait Transport {
    /// Body reader for endpoints whose response never ends.
    type Stream: Read;

    fn send(&self, request: SignedRequest) -> Result<Response, Error>;

    /// Dispatch and hand back the raw body stream.
    ///
    /// The caller never sees the status line, so implementations surface a
    /// non-200 reply as [`Error::Status`] themselves.
    fn send_streaming(&self, request: SignedRequest) -> Result<Self::Stream, Error>;
}

/// Default transport on top of the blocking reqwest client.
#[cfg(feature = "reqwest")]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "reqwest")]
impl ReqwestTransport {
    pub fn new() -> Self {
        ReqwestTransport {
            client: reqwest::blocking::Client::new(),
        }
    }

    fn dispatch(&self, request: SignedRequest) -> Result<reqwest::blocking::Response, Error> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|_| Error::Transport(format!("invalid http method: {}", request.method)))?;

        let mut builder = self.client.request(method, request.uri.as_str());
        let headers = request.headers();
        for (name, value) in headers.iter() {
            builder = builder.header(*name, *value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        Ok(builder.send()?)
    }
}

#[cfg(feature = "reqwest")]
impl Default for ReqwestTransport {
    fn default() -> Self {
        ReqwestTransport::new()
    }
}

#[cfg(feature = "reqwest")]
impl Transport for ReqwestTransport {
    type Stream = reqwest::blocking::Response;

    fn send(&self, request: SignedRequest) -> Result<Response, Error> {
        let response = self.dispatch(request)?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        Ok(Response { status, body })
    }

    fn send_streaming(&self, request: SignedRequest) -> Result<Self::Stream, Error> {
        let response = self.dispatch(request)?;
        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().unwrap_or_default();
            return Err(Error::Status { status, body });
        }
        Ok(response)
    }
}
