use axum_extra::extract::cookie::CookieJar;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::cookie::AuthCookie,
    model::user::User,
    service::auth::token::TokenService,
};

/// Resolves the user behind the request's session cookie.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jar: &'a CookieJar,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jar: &'a CookieJar, tokens: &'a TokenService) -> Self {
        Self { db, jar, tokens }
    }

    /// Requires a valid session token naming an existing user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No `token` cookie
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or the user no longer exists
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(token) = AuthCookie::token(self.jar) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(&token)?;

        let Some(user_id) = claims.user_id() else {
            return Err(AuthError::InvalidToken.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        Ok(user)
    }
}
