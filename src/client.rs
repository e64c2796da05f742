use log::debug;

use crate::error::Error;
use crate::models::{
    AccountsScheduledTweetsInput, ListsListInput, ListsMembersInput, ListsMembersShowInput,
    OAuthAccessTokenInput, OAuthAccessTokenOutput, OAuthRequestTokenInput,
    OAuthRequestTokenOutput, StatusesFilterInput, StatusesUpdateInput, StatusesUserTimelineInput,
};
use crate::params::{ParamList, ToParams};
use crate::signer::{
    sign, ClockSource, Credentials, NonceSource, SignedRequest, SystemClock, SystemNonce,
};
#[cfg(feature = "reqwest")]
use crate::transport::ReqwestTransport;
use crate::transport::{Response, Transport};

const OAUTH_REQUEST_TOKEN_URI: &str = "https://api.twitter.com/oauth/request_token";
const OAUTH_ACCESS_TOKEN_URI: &str = "https://api.twitter.com/oauth/access_token";
const STATUSES_UPDATE_URI: &str = "https://api.twitter.com/1.1/statuses/update.json";
const STATUSES_USER_TIMELINE_URI: &str =
    "https://api.twitter.com/1.1/statuses/user_timeline.json";
const STATUSES_FILTER_URI: &str = "https://stream.twitter.com/1.1/statuses/filter.json";
const LISTS_LIST_URI: &str = "https://api.twitter.com/1.1/lists/list.json";
const LISTS_MEMBERS_URI: &str = "https://api.twitter.com/1.1/lists/members.json";
const LISTS_MEMBERS_SHOW_URI: &str = "https://api.twitter.com/1.1/lists/members/show.json";
const ADS_ACCOUNTS_URI: &str = "https://ads-api.twitter.com/8/accounts";

/// Client making signed requests on behalf of one consumer.
///
/// Endpoints whose responses are form-encoded decode into typed outputs;
/// the JSON endpoints hand back the raw [`Response`] for the caller to
/// interpret.
pub struct Client<T> {
    credentials: Credentials,
    transport: T,
    noncer: Box<dyn NonceSource>,
    clock: Box<dyn ClockSource>,
}

#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Client::with_transport(consumer_key, consumer_secret, ReqwestTransport::new())
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        transport: T,
    ) -> Self {
        Client {
            credentials: Credentials::new(consumer_key, consumer_secret),
            transport,
            noncer: Box::new(SystemNonce),
            clock: Box::new(SystemClock),
        }
    }

    /// Install the access token pair obtained from the handshake.
    pub fn set_access_keys(
        &mut self,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) {
        self.credentials.set_token(token, token_secret);
    }

    pub fn set_nonce_source(&mut self, noncer: Box<dyn NonceSource>) {
        self.noncer = noncer;
    }

    pub fn set_clock_source(&mut self, clock: Box<dyn ClockSource>) {
        self.clock = clock;
    }

    /// Build a signed request without dispatching it.
    pub fn signed_request(
        &self,
        method: &str,
        uri: &str,
        params: &ParamList,
    ) -> Result<SignedRequest, Error> {
        sign(
            &self.credentials,
            method,
            uri,
            params,
            self.noncer.as_ref(),
            self.clock.as_ref(),
        )
    }

    fn execute(&self, method: &str, uri: &str, params: &ParamList) -> Result<Response, Error> {
        let request = self.signed_request(method, uri, params)?;
        debug!("{} {}", request.method, request.uri);
        let response = self.transport.send(request)?;
        if response.status != 200 {
            return Err(Error::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }
        Ok(response)
    }

    /// Obtain a temporary oauth_token and oauth_token_secret.
    /// https://developer.twitter.com/en/docs/basics/authentication/api-reference/request_token
    pub fn oauth_request_token(
        &self,
        input: OAuthRequestTokenInput,
    ) -> Result<OAuthRequestTokenOutput, Error> {
        let response = self.execute("POST", OAUTH_REQUEST_TOKEN_URI, &input.to_params())?;
        decode_form(&response.body)
    }

    /// Exchange a temporary token for a permanent one.
    /// https://developer.twitter.com/en/docs/basics/authentication/api-reference/access_token
    pub fn oauth_access_token(
        &self,
        input: OAuthAccessTokenInput,
    ) -> Result<OAuthAccessTokenOutput, Error> {
        let response = self.execute("POST", OAUTH_ACCESS_TOKEN_URI, &input.to_params())?;
        decode_form(&response.body)
    }

    /// Post a status update.
    /// https://developer.twitter.com/en/docs/tweets/post-and-engage/api-reference/post-statuses-update
    pub fn statuses_update(&self, input: StatusesUpdateInput) -> Result<Response, Error> {
        self.execute("POST", STATUSES_UPDATE_URI, &input.to_params())
    }

    /// Read a user's timeline.
    /// https://developer.twitter.com/en/docs/tweets/timelines/api-reference/get-statuses-user_timeline
    pub fn statuses_user_timeline(
        &self,
        input: StatusesUserTimelineInput,
    ) -> Result<Response, Error> {
        self.execute("GET", STATUSES_USER_TIMELINE_URI, &input.to_params())
    }

    /// List the lists the authenticating or specified user subscribes to.
    /// https://developer.twitter.com/en/docs/accounts-and-users/create-manage-lists/api-reference/get-lists-list
    pub fn lists_list(&self, input: ListsListInput) -> Result<Response, Error> {
        self.execute("GET", LISTS_LIST_URI, &input.to_params())
    }

    /// List the members of a list.
    /// https://developer.twitter.com/en/docs/accounts-and-users/create-manage-lists/api-reference/get-lists-members
    pub fn lists_members(&self, input: ListsMembersInput) -> Result<Response, Error> {
        self.execute("GET", LISTS_MEMBERS_URI, &input.to_params())
    }

    /// Check whether a user is a member of a list.
    /// https://developer.twitter.com/en/docs/accounts-and-users/create-manage-lists/api-reference/get-lists-members-show
    pub fn lists_members_show(&self, input: ListsMembersShowInput) -> Result<Response, Error> {
        self.execute("GET", LISTS_MEMBERS_SHOW_URI, &input.to_params())
    }

    /// Open the filtered status stream and hand back the body reader.
    /// https://developer.twitter.com/en/docs/tweets/filter-realtime/api-reference/post-statuses-filter
    pub fn statuses_filter(&self, input: StatusesFilterInput) -> Result<T::Stream, Error> {
        let request = self.signed_request("POST", STATUSES_FILTER_URI, &input.to_params())?;
        debug!("{} {} (streaming)", request.method, request.uri);
        self.transport.send_streaming(request)
    }

    /// Schedule a tweet through the ads api.
    pub fn accounts_scheduled_tweets(
        &self,
        input: AccountsScheduledTweetsInput,
        account_id: &str,
    ) -> Result<Response, Error> {
        let uri = format!("{}/{}/scheduled_tweets", ADS_ACCOUNTS_URI, account_id);
        self.execute("POST", &uri, &input.to_params())
    }
}

fn decode_form<O: serde::de::DeserializeOwned>(body: &[u8]) -> Result<O, Error> {
    serde_urlencoded::from_bytes(body).map_err(|err| Error::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    struct FixedNonce(&'static str);

    impl NonceSource for FixedNonce {
        fn nonce(&self) -> String {
            self.0.to_string()
        }
    }

    struct FixedClock(i64);

    impl ClockSource for FixedClock {
        fn unix_timestamp(&self) -> i64 {
            self.0
        }
    }

    struct MockTransport {
        captured: Arc<Mutex<Vec<SignedRequest>>>,
        status: u16,
        body: Vec<u8>,
    }

    impl MockTransport {
        fn ok(captured: Arc<Mutex<Vec<SignedRequest>>>, body: &[u8]) -> Self {
            MockTransport {
                captured,
                status: 200,
                body: body.to_vec(),
            }
        }
    }

    impl Transport for MockTransport {
        type Stream = Cursor<Vec<u8>>;

        fn send(&self, request: SignedRequest) -> Result<Response, Error> {
            self.captured.lock().unwrap().push(request);
            Ok(Response {
                status: self.status,
                body: self.body.clone(),
            })
        }

        fn send_streaming(&self, request: SignedRequest) -> Result<Self::Stream, Error> {
            self.captured.lock().unwrap().push(request);
            Ok(Cursor::new(self.body.clone()))
        }
    }

    fn test_client(transport: MockTransport) -> Client<MockTransport> {
        let mut client = Client::with_transport("ck", "cs", transport);
        client.set_nonce_source(Box::new(FixedNonce("kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg")));
        client.set_clock_source(Box::new(FixedClock(1_318_622_958)));
        client
    }

    #[test]
    fn get_endpoint_sends_params_on_the_query_string() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let client = test_client(MockTransport::ok(Arc::clone(&captured), b"[]"));

        let input = StatusesUserTimelineInput {
            screen_name: Some("twitterapi".to_string()),
            count: Some(2),
            ..Default::default()
        };
        client.statuses_user_timeline(input).unwrap();

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let request = &captured[0];
        assert_eq!(request.method, "GET");
        assert_eq!(
            request.uri,
            "https://api.twitter.com/1.1/statuses/user_timeline.json?count=2&screen_name=twitterapi"
        );
        assert!(request.body.is_none());
        assert!(request.authorization.starts_with("OAuth "));
    }

    #[test]
    fn post_endpoint_sends_params_in_the_body() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let client = test_client(MockTransport::ok(Arc::clone(&captured), b"{}"));

        let input = StatusesUpdateInput {
            status: Some("Hello Ladies + Gentlemen, a signed OAuth request!".to_string()),
            ..Default::default()
        };
        client.statuses_update(input).unwrap();

        let captured = captured.lock().unwrap();
        let request = &captured[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.uri, STATUSES_UPDATE_URI);
        assert_eq!(
            request.body.as_deref(),
            Some("status=Hello+Ladies+%2B+Gentlemen%2C+a+signed+OAuth+request%21")
        );
    }

    #[test]
    fn oauth_token_appears_after_access_keys_are_set() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let mut client = test_client(MockTransport::ok(Arc::clone(&captured), b"{}"));

        client.statuses_update(StatusesUpdateInput::default()).unwrap();
        client.set_access_keys("token", "token-secret");
        client.statuses_update(StatusesUpdateInput::default()).unwrap();

        let captured = captured.lock().unwrap();
        assert!(!captured[0].authorization.contains("oauth_token="));
        assert!(captured[1].authorization.contains("oauth_token=\"token\""));
    }

    #[test]
    fn request_token_response_is_form_decoded() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let body = b"oauth_token=tok&oauth_token_secret=sec&oauth_callback_confirmed=true";
        let client = test_client(MockTransport::ok(Arc::clone(&captured), body));

        let input = OAuthRequestTokenInput {
            oauth_callback: Some("http://127.0.0.1:3000/oauth_response".to_string()),
            ..Default::default()
        };
        let output = client.oauth_request_token(input).unwrap();

        assert_eq!(output.oauth_token, "tok");
        assert_eq!(output.oauth_token_secret, "sec");
        assert!(output.oauth_callback_confirmed);

        let captured = captured.lock().unwrap();
        assert_eq!(
            captured[0].body.as_deref(),
            Some("oauth_callback=http%3A%2F%2F127.0.0.1%3A3000%2Foauth_response")
        );
    }

    #[test]
    fn non_200_status_becomes_an_error() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let transport = MockTransport {
            captured: Arc::clone(&captured),
            status: 403,
            body: b"forbidden".to_vec(),
        };
        let client = test_client(transport);

        let err = client
            .statuses_update(StatusesUpdateInput::default())
            .unwrap_err();
        match err {
            Error::Status { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "forbidden");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn filter_stream_hands_back_the_body_reader() {
        use std::io::Read;

        let captured = Arc::new(Mutex::new(Vec::new()));
        let client = test_client(MockTransport::ok(Arc::clone(&captured), b"{\"text\":\"hi\"}\r\n"));

        let input = StatusesFilterInput {
            track: Some("rustlang".to_string()),
            ..Default::default()
        };
        let mut stream = client.statuses_filter(input).unwrap();
        let mut body = String::new();
        stream.read_to_string(&mut body).unwrap();

        assert_eq!(body, "{\"text\":\"hi\"}\r\n");
        let captured = captured.lock().unwrap();
        assert_eq!(captured[0].uri, STATUSES_FILTER_URI);
        assert_eq!(captured[0].body.as_deref(), Some("track=rustlang"));
    }
}
