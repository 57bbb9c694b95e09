use crate::server::{
    error::{auth::AuthError, AppError},
    service::oauth::{GoogleAuthService, GoogleProfile, TokenInfo},
};

const GOOGLE_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

impl<'a> GoogleAuthService<'a> {
    /// Verifies an ID token issued to the browser by Google Identity Services.
    ///
    /// # Returns
    /// - `Ok(GoogleProfile)` - Token is valid for this client and has a verified email
    /// - `Err(AuthError::InvalidGoogleToken)` - Google rejected the token or a claim is missing
    /// - `Err(AppError::ReqwestErr)` - Google could not be reached
    pub async fn verify_id_token(&self, credential: &str) -> Result<GoogleProfile, AppError> {
        let response = self
            .http_client
            .get(GOOGLE_TOKENINFO_URL)
            .query(&[("id_token", credential)])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("Google tokeninfo rejected token: {}", response.status());
            return Err(AuthError::InvalidGoogleToken.into());
        }

        let info = response.json::<TokenInfo>().await?;

        profile_from_token_info(info, self.client_id)
            .ok_or_else(|| AuthError::InvalidGoogleToken.into())
    }
}

fn profile_from_token_info(info: TokenInfo, client_id: &str) -> Option<GoogleProfile> {
    if info.aud.as_deref() != Some(client_id) {
        return None;
    }
    if info.email_verified.as_deref() != Some("true") {
        return None;
    }

    Some(GoogleProfile {
        sub: info.sub.filter(|s| !s.is_empty())?,
        email: info.email.filter(|s| !s.is_empty())?,
        name: info.name.filter(|s| !s.trim().is_empty())?,
        picture: info.picture,
    })
}
