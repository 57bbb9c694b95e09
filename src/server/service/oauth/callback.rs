use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::oauth::{GoogleAuthService, GoogleProfile, UserInfo},
};

const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

impl<'a> GoogleAuthService<'a> {
    /// Exchanges an authorization code for a token and fetches the Google profile.
    ///
    /// # Returns
    /// - `Ok(GoogleProfile)` - Verified profile of the signed-in account
    /// - `Err(AuthError::GoogleLoginFailed)` - Code exchange or profile request failed
    /// - `Err(AuthError::InvalidGoogleToken)` - Profile lacks a verified email, name or subject
    pub async fn callback(&self, authorization_code: String) -> Result<GoogleProfile, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::GoogleLoginFailed(e.to_string()))?;

        let user_info = self.fetch_user_info(&token).await?;

        profile_from_user_info(user_info).ok_or_else(|| AuthError::InvalidGoogleToken.into())
    }

    async fn fetch_user_info(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<UserInfo, AppError> {
        let access_token = token.access_token().secret();

        let response = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::GoogleLoginFailed(format!(
                "userinfo returned {}",
                response.status()
            ))
            .into());
        }

        Ok(response.json::<UserInfo>().await?)
    }
}

fn profile_from_user_info(info: UserInfo) -> Option<GoogleProfile> {
    if !info.email_verified {
        return None;
    }

    Some(GoogleProfile {
        sub: info.sub.filter(|s| !s.is_empty())?,
        email: info.email.filter(|s| !s.is_empty())?,
        name: info.name.filter(|s| !s.trim().is_empty())?,
        picture: info.picture,
    })
}
