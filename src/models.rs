use serde::Deserialize;

use crate::params::{ParamList, ToParams};

/// Inputs for the request token endpoint.
#[derive(Clone, Debug, Default)]
pub struct OAuthRequestTokenInput {
    pub oauth_callback: Option<String>,
    pub x_auth_access_type: Option<String>,
}

impl ToParams for OAuthRequestTokenInput {
    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("oauth_callback", self.oauth_callback.clone());
        params.push_opt("x_auth_access_type", self.x_auth_access_type.clone());
        params
    }
}

/// Temporary token handed back by the request token endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct OAuthRequestTokenOutput {
    pub oauth_token: String,
    pub oauth_token_secret: String,
    pub oauth_callback_confirmed: bool,
}

/// Inputs to exchange a temporary token for a permanent one.
#[derive(Clone, Debug, Default)]
pub struct OAuthAccessTokenInput {
    pub oauth_token: Option<String>,
    pub oauth_verifier: Option<String>,
}

impl ToParams for OAuthAccessTokenInput {
    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("oauth_token", self.oauth_token.clone());
        params.push_opt("oauth_verifier", self.oauth_verifier.clone());
        params
    }
}

/// Long-lived token handed back by the access token endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct OAuthAccessTokenOutput {
    pub oauth_token: String,
    pub oauth_token_secret: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub screen_name: String,
}

/// Inputs for posting a status update.
/// https://developer.twitter.com/en/docs/tweets/post-and-engage/api-reference/post-statuses-update
#[derive(Clone, Debug, Default)]
pub struct StatusesUpdateInput {
    pub status: Option<String>,
    pub in_reply_to_status_id: Option<i64>,
    pub auto_populate_reply_metadata: Option<bool>,
    pub exclude_reply_user_ids: Option<String>,
    pub attachment_url: Option<String>,
    pub media_ids: Option<String>,
    pub possibly_sensitive: Option<bool>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub place_id: Option<String>,
    pub display_coordinates: Option<bool>,
    pub trim_user: Option<bool>,
    pub enable_dmcommands: Option<bool>,
    pub fail_dmcommands: Option<bool>,
    pub card_uri: Option<String>,
}

impl ToParams for StatusesUpdateInput {
    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("status", self.status.clone());
        params.push_opt("in_reply_to_status_id", self.in_reply_to_status_id);
        params.push_opt(
            "auto_populate_reply_metadata",
            self.auto_populate_reply_metadata,
        );
        params.push_opt("exclude_reply_user_ids", self.exclude_reply_user_ids.clone());
        params.push_opt("attachment_url", self.attachment_url.clone());
        params.push_opt("media_ids", self.media_ids.clone());
        params.push_opt("possibly_sensitive", self.possibly_sensitive);
        params.push_opt("lat", self.lat);
        params.push_opt("long", self.long);
        params.push_opt("place_id", self.place_id.clone());
        params.push_opt("display_coordinates", self.display_coordinates);
        params.push_opt("trim_user", self.trim_user);
        params.push_opt("enable_dmcommands", self.enable_dmcommands);
        params.push_opt("fail_dmcommands", self.fail_dmcommands);
        params.push_opt("card_uri", self.card_uri.clone());
        params
    }
}

/// Inputs for the streaming filter endpoint.
/// https://developer.twitter.com/en/docs/tweets/filter-realtime/api-reference/post-statuses-filter
#[derive(Clone, Debug, Default)]
pub struct StatusesFilterInput {
    pub follow: Option<String>,
    pub track: Option<String>,
    pub locations: Option<String>,
    pub delimited: Option<String>,
    pub stall_warnings: Option<String>,
}

impl ToParams for StatusesFilterInput {
    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("follow", self.follow.clone());
        params.push_opt("track", self.track.clone());
        params.push_opt("locations", self.locations.clone());
        params.push_opt("delimited", self.delimited.clone());
        params.push_opt("stall_warnings", self.stall_warnings.clone());
        params
    }
}

/// Inputs for reading a user's timeline.
/// https://developer.twitter.com/en/docs/tweets/timelines/api-reference/get-statuses-user_timeline
#[derive(Clone, Debug, Default)]
pub struct StatusesUserTimelineInput {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub since_id: Option<i64>,
    pub count: Option<i64>,
    pub max_id: Option<i64>,
    pub trim_user: Option<bool>,
    pub exclude_replies: Option<bool>,
    pub include_rts: Option<bool>,
}

impl ToParams for StatusesUserTimelineInput {
    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("user_id", self.user_id);
        params.push_opt("screen_name", self.screen_name.clone());
        params.push_opt("since_id", self.since_id);
        params.push_opt("count", self.count);
        params.push_opt("max_id", self.max_id);
        params.push_opt("trim_user", self.trim_user);
        params.push_opt("exclude_replies", self.exclude_replies);
        params.push_opt("include_rts", self.include_rts);
        params
    }
}

/// Inputs for listing the lists a user subscribes to.
/// https://developer.twitter.com/en/docs/accounts-and-users/create-manage-lists/api-reference/get-lists-list
#[derive(Clone, Debug, Default)]
pub struct ListsListInput {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub reverse: Option<bool>,
}

impl ToParams for ListsListInput {
    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("user_id", self.user_id);
        params.push_opt("screen_name", self.screen_name.clone());
        params.push_opt("reverse", self.reverse);
        params
    }
}

/// Inputs for listing the members of a list.
/// https://developer.twitter.com/en/docs/accounts-and-users/create-manage-lists/api-reference/get-lists-members
#[derive(Clone, Debug, Default)]
pub struct ListsMembersInput {
    pub list_id: Option<i64>,
    pub slug: Option<String>,
    pub owner_screen_name: Option<String>,
    pub owner_id: Option<i64>,
    pub count: Option<i64>,
    pub cursor: Option<i64>,
    pub include_entities: Option<bool>,
    pub skip_status: Option<bool>,
}

impl ToParams for ListsMembersInput {
    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("list_id", self.list_id);
        params.push_opt("slug", self.slug.clone());
        params.push_opt("owner_screen_name", self.owner_screen_name.clone());
        params.push_opt("owner_id", self.owner_id);
        params.push_opt("count", self.count);
        params.push_opt("cursor", self.cursor);
        params.push_opt("include_entities", self.include_entities);
        params.push_opt("skip_status", self.skip_status);
        params
    }
}

/// Inputs for checking whether a user is a member of a list.
/// https://developer.twitter.com/en/docs/accounts-and-users/create-manage-lists/api-reference/get-lists-members-show
#[derive(Clone, Debug, Default)]
pub struct ListsMembersShowInput {
    pub list_id: Option<i64>,
    pub slug: Option<String>,
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub owner_screen_name: Option<String>,
    pub owner_id: Option<i64>,
    pub include_entities: Option<bool>,
    pub skip_status: Option<bool>,
}

impl ToParams for ListsMembersShowInput {
    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("list_id", self.list_id);
        params.push_opt("slug", self.slug.clone());
        params.push_opt("user_id", self.user_id);
        params.push_opt("screen_name", self.screen_name.clone());
        params.push_opt("owner_screen_name", self.owner_screen_name.clone());
        params.push_opt("owner_id", self.owner_id);
        params.push_opt("include_entities", self.include_entities);
        params.push_opt("skip_status", self.skip_status);
        params
    }
}

/// Inputs for scheduling a tweet through the ads api.
#[derive(Clone, Debug, Default)]
pub struct AccountsScheduledTweetsInput {
    pub scheduled_at: Option<String>,
    pub as_user_id: Option<i64>,
    pub text: Option<String>,
    pub card_uri: Option<String>,
    pub media_keys: Option<String>,
    pub nullcast: Option<bool>,
}

impl ToParams for AccountsScheduledTweetsInput {
    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("scheduled_at", self.scheduled_at.clone());
        params.push_opt("as_user_id", self.as_user_id);
        params.push_opt("text", self.text.clone());
        params.push_opt("card_uri", self.card_uri.clone());
        params.push_opt("media_keys", self.media_keys.clone());
        params.push_opt("nullcast", self.nullcast);
        params
    }
}
