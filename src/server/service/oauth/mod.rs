//! Google identity verification and the OAuth2 authorization-code flow.

use serde::Deserialize;

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod id_token;
pub mod login;

/// Verified identity returned by Google.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleProfile {
    /// Stable Google subject identifier.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

/// Claims returned by the `tokeninfo` endpoint. Google encodes booleans as strings here.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenInfo {
    pub aud: Option<String>,
    pub sub: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Profile returned by the OpenID userinfo endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct UserInfo {
    pub sub: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub name: Option<String>,
    pub picture: Option<String>,
}

pub struct GoogleAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    /// OAuth client id, the expected audience of ID tokens.
    pub client_id: &'a str,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        client_id: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            client_id,
        }
    }
}
