use entity::user::AuthProvider;
use validator::Validate;

use crate::{
    model::auth::RegisterDto,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::{
            media::MediaUpload,
            user::{CreateUserParam, User},
        },
        service::auth::{password::hash_password, AuthService},
    },
};

/// Folder uploaded avatars are stored under.
const AVATAR_FOLDER: &str = "avatars";

impl<'a> AuthService<'a> {
    /// Registers a local account.
    ///
    /// # Arguments
    /// - `dto` - Username, email and plain-text password
    /// - `avatar` - Optional avatar image uploaded with the form
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Validation)` - Field constraints failed
    /// - `Err(AppError::BadRequest)` - Email or username already taken, or the avatar is rejected
    pub async fn register(
        &self,
        dto: RegisterDto,
        avatar: Option<MediaUpload>,
    ) -> Result<User, AppError> {
        dto.validate()?;

        let user_repo = UserRepository::new(self.db);

        if user_repo
            .exists_by_email_or_username(&dto.email, &dto.username)
            .await?
        {
            return Err(AppError::BadRequest(
                "Email or username already in use".to_string(),
            ));
        }

        let password_hash = hash_password(&dto.password)?;

        let avatar = match avatar {
            Some(upload) => Some(self.media.save(&upload, AVATAR_FOLDER).await?.url),
            None => None,
        };

        let user = user_repo
            .create(CreateUserParam {
                username: dto.username,
                email: dto.email,
                password_hash: Some(password_hash),
                google_id: None,
                avatar,
                auth_provider: AuthProvider::Local,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }
}
