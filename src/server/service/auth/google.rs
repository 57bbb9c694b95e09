use entity::user::AuthProvider;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User},
    service::{auth::AuthService, oauth::GoogleProfile},
};

impl<'a> AuthService<'a> {
    /// Finds or creates the account for a verified Google identity.
    ///
    /// Accounts are matched by Google subject first, then by email. A Google
    /// account found by email gets the subject attached; a local account with
    /// the same email is refused.
    ///
    /// # Returns
    /// - `Ok(User)` - Existing, linked or newly created account
    /// - `Err(AuthError::ProviderMismatch)` - Email belongs to a local account
    pub async fn resolve_google_user(&self, profile: GoogleProfile) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_google_id(&profile.sub).await? {
            return Ok(user);
        }

        if let Some(mut user) = user_repo.find_by_email(&profile.email).await? {
            if user.auth_provider != AuthProvider::Google {
                return Err(AuthError::ProviderMismatch.into());
            }

            user_repo.set_google_id(user.id, &profile.sub).await?;
            user.google_id = Some(profile.sub);

            return Ok(user);
        }

        let base = username_from_name(&profile.name);
        let mut username = base.clone();
        let mut suffix = 1;
        while user_repo.username_exists(&username).await? {
            username = format!("{}_{}", base, suffix);
            suffix += 1;
        }

        let user = user_repo
            .create(CreateUserParam {
                username,
                email: profile.email,
                password_hash: None,
                google_id: Some(profile.sub),
                avatar: profile.picture,
                auth_provider: AuthProvider::Google,
            })
            .await?;

        tracing::info!("Created Google user {} ({})", user.username, user.id);

        Ok(user)
    }
}

/// Derives a username from a display name: whitespace runs become `_`, then lowercase.
pub fn username_from_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}
