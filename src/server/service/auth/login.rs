use validator::Validate;

use crate::{
    model::auth::LoginDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::User,
        service::auth::{password::verify_password, AuthService},
    },
};

impl<'a> AuthService<'a> {
    /// Checks an email/password pair.
    ///
    /// Unknown emails, wrong passwords and accounts without a local password
    /// all fail the same way.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::Validation)` - Field constraints failed
    /// - `Err(AuthError::InvalidCredentials)` - No match
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        dto.validate()?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&dto.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(hash) = user.password_hash.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&dto.password, hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
