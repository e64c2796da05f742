//! OAuth 1.0a signed client for the Twitter REST API.
//!
//! The signing core (`params` + `signer`) is pure and synchronous; the
//! `client` module layers the typed endpoint surface on top and dispatches
//! through a pluggable `transport`. Build with `--no-default-features` to
//! drop the bundled reqwest transport and supply your own.

pub mod client;
pub mod error;
pub mod models;
pub mod params;
pub mod signer;
pub mod transport;

mod util;

pub use client::Client;
pub use error::Error;
pub use models::*;
pub use params::{ParamList, ParamValue, ToParams};
pub use signer::{
    sign, AccessToken, ClockSource, Credentials, NonceSource, SignedRequest, SystemClock,
    SystemNonce,
};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use transport::{Response, Transport};
