use std::borrow::Cow;

use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use sha1::Sha1;
use url::Url;

use crate::error::Error;
use crate::params::ParamList;
use crate::util;

type HmacSha1 = Hmac<Sha1>;

const OAUTH_HEADER: &str = "OAuth";
const OAUTH_VERSION: &str = "1.0";
const SIGNATURE_METHOD_HMAC_SHA1: &str = "HMAC-SHA1";

const OAUTH_PARAM_KEY_CONSUMER_KEY: &str = "oauth_consumer_key";
const OAUTH_PARAM_KEY_NONCE: &str = "oauth_nonce";
const OAUTH_PARAM_KEY_SIGNATURE: &str = "oauth_signature";
const OAUTH_PARAM_KEY_SIGNATURE_METHOD: &str = "oauth_signature_method";
const OAUTH_PARAM_KEY_TIMESTAMP: &str = "oauth_timestamp";
const OAUTH_PARAM_KEY_TOKEN: &str = "oauth_token";
const OAUTH_PARAM_KEY_VERSION: &str = "oauth_version";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const NONCE_LEN: usize = 48;

/// OAuth client credentials.
///
/// The access token pair is absent until the authorization handshake has
/// finished; its presence decides whether `oauth_token` takes part in the
/// signature and the header. Credentials are read-only once handed to a
/// signer, which makes them safe to share across concurrent requests.
#[derive(Clone, Debug)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
    token: Option<AccessToken>,
}

/// Access token pair obtained from the authorization handshake.
#[derive(Clone, Debug)]
pub struct AccessToken {
    key: String,
    secret: String,
}

impl AccessToken {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl Credentials {
    /// Credentials for the pre-authorization phase, no access token yet.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: None,
        }
    }

    pub fn new_with_token(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: Some(AccessToken {
                key: token.into(),
                secret: token_secret.into(),
            }),
        }
    }

    /// Install the access token pair after the handshake.
    pub fn set_token(&mut self, token: impl Into<String>, token_secret: impl Into<String>) {
        self.token = Some(AccessToken {
            key: token.into(),
            secret: token_secret.into(),
        });
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }
}

/// Produces a fresh unpredictable token per request.
///
/// Implementations must be safe to call from many threads at once and must
/// never hand out the same nonce for two in-flight requests.
pub trait NonceSource: Send + Sync {
    fn nonce(&self) -> String;
}

/// Produces the current time as seconds since the epoch.
pub trait ClockSource: Send + Sync {
    fn unix_timestamp(&self) -> i64;
}

/// Default nonce source: 48 alphanumeric characters from the thread rng.
pub struct SystemNonce;

impl NonceSource for SystemNonce {
    fn nonce(&self) -> String {
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .collect()
    }
}

/// Default clock source, wall clock in UTC.
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// An outgoing request with its `Authorization` header computed.
///
/// `body` is `None` for verbs that carry their parameters on the query
/// string. The two headers from [`headers`](SignedRequest::headers) must be
/// attached verbatim when the request is dispatched.
#[derive(Clone, Debug)]
pub struct SignedRequest {
    pub method: String,
    pub uri: String,
    pub authorization: String,
    pub body: Option<String>,
}

impl SignedRequest {
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            ("Content-Type", FORM_CONTENT_TYPE),
            ("Authorization", self.authorization.as_str()),
        ]
    }
}

enum ParamPlacement {
    Query,
    Body,
}

// verbs that carry no body put their parameters on the query string
fn placement_for(method: &str) -> ParamPlacement {
    match method.to_ascii_uppercase().as_str() {
        "GET" | "HEAD" => ParamPlacement::Query,
        _ => ParamPlacement::Body,
    }
}

/// Sign a request with the HMAC-SHA1 variant of OAuth 1.0a.
///
/// # Parameters
/// - method: HTTP method, ex)"GET", "POST", ...
/// - uri: target URI, may already carry a query string.
/// - params: wire parameters produced by the canonicalizer.
/// # Returns
/// a request with the `Authorization` header computed and the parameters
/// placed per the method, ready to hand to a transport.
/// # Note
/// signing is synchronous and purely local; the same inputs with the same
/// nonce and timestamp always produce the same request.
pub fn sign(
    credentials: &Credentials,
    method: &str,
    uri: &str,
    params: &ParamList,
    noncer: &dyn NonceSource,
    clock: &dyn ClockSource,
) -> Result<SignedRequest, Error> {
    let nonce = noncer.nonce();
    let timestamp = clock.unix_timestamp().to_string();

    let sr = SignatureRequest {
        method,
        uri,
        nonce: &nonce,
        timestamp: &timestamp,
        params,
    };
    let oauth_signature = sr.signature(credentials)?;
    let authorization = authorization_header(credentials, &nonce, &timestamp, &oauth_signature);

    let (uri, body) = match placement_for(method) {
        ParamPlacement::Query => (merge_query(uri, params), None),
        ParamPlacement::Body => (uri.to_string(), Some(params.encode())),
    };

    Ok(SignedRequest {
        method: method.to_ascii_uppercase(),
        uri,
        authorization,
        body,
    })
}

// parameters are appended after any query already present, so the
// transmitted set stays identical to the signed set
fn merge_query(uri: &str, params: &ParamList) -> String {
    if params.is_empty() {
        uri.to_string()
    } else if uri.contains('?') {
        format!("{}&{}", uri, params.encode())
    } else {
        format!("{}?{}", uri, params.encode())
    }
}

/// One signing computation, consumed immediately and never persisted.
struct SignatureRequest<'a> {
    method: &'a str,
    uri: &'a str,
    nonce: &'a str,
    timestamp: &'a str,
    params: &'a ParamList,
}

impl<'a> SignatureRequest<'a> {
    fn signature(&self, credentials: &Credentials) -> Result<String, Error> {
        let target = Url::parse(self.uri)?;

        // parameters already on the target uri take part in the signature
        let mut values: Vec<(Cow<str>, Cow<str>)> = target.query_pairs().collect();

        values.push((
            OAUTH_PARAM_KEY_CONSUMER_KEY.into(),
            credentials.consumer_key.as_str().into(),
        ));
        values.push((OAUTH_PARAM_KEY_NONCE.into(), self.nonce.into()));
        values.push((
            OAUTH_PARAM_KEY_SIGNATURE_METHOD.into(),
            SIGNATURE_METHOD_HMAC_SHA1.into(),
        ));
        values.push((OAUTH_PARAM_KEY_TIMESTAMP.into(), self.timestamp.into()));
        values.push((OAUTH_PARAM_KEY_VERSION.into(), OAUTH_VERSION.into()));
        if let Some(token) = credentials.token() {
            values.push((OAUTH_PARAM_KEY_TOKEN.into(), token.key.as_str().into()));
        }

        // caller parameter names are escaped on insertion, so a name that
        // needs escaping ends up escaped twice in the parameter string
        // below; existing servers expect exactly this
        for (name, value) in self.params.iter() {
            values.push((util::percent_encode(name).to_string().into(), value.into()));
        }

        // alphabetic sort by key; entries with equal keys keep insertion order
        values.sort_by(|a, b| a.0.cmp(&b.0));

        let param_str = values
            .iter()
            .map(|(k, v)| format!("{}={}", util::percent_encode(k), util::percent_encode(v)))
            .collect::<Vec<String>>()
            .join("&");

        // create signature base string
        let base_str = format!(
            "{}&{}&{}",
            util::percent_encode(&self.method.to_ascii_uppercase()),
            util::percent_encode(util::base_uri(self.uri)),
            util::percent_encode(&param_str),
        );

        // create sign key; the '&' is present even without a token secret
        let token_secret = credentials.token().map(|t| t.secret.as_str()).unwrap_or("");
        let sign_key = format!(
            "{}&{}",
            util::percent_encode(&credentials.consumer_secret),
            util::percent_encode(token_secret),
        );

        let mut mac = HmacSha1::new_varkey(sign_key.as_bytes())
            .map_err(|_| Error::Signing("hmac rejected the signing key".to_string()))?;
        mac.input(base_str.as_bytes());
        let hash = mac.result().code();
        Ok(base64::encode(&hash))
    }
}

fn authorization_header(
    credentials: &Credentials,
    nonce: &str,
    timestamp: &str,
    signature: &str,
) -> String {
    // fixed field order
    let mut fields = vec![
        (OAUTH_PARAM_KEY_CONSUMER_KEY, credentials.consumer_key()),
        (OAUTH_PARAM_KEY_NONCE, nonce),
        (OAUTH_PARAM_KEY_SIGNATURE, signature),
        (OAUTH_PARAM_KEY_SIGNATURE_METHOD, SIGNATURE_METHOD_HMAC_SHA1),
        (OAUTH_PARAM_KEY_TIMESTAMP, timestamp),
    ];
    if let Some(token) = credentials.token() {
        fields.push((OAUTH_PARAM_KEY_TOKEN, token.key()));
    }
    fields.push((OAUTH_PARAM_KEY_VERSION, OAUTH_VERSION));

    let fields = fields
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, util::percent_encode(v)))
        .collect::<Vec<String>>()
        .join(", ");
    format!("{} {}", OAUTH_HEADER, fields)
}
