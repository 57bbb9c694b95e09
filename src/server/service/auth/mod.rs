//! Account registration, password login and Google sign-in.
//!
//! Session tokens are issued by [`token::TokenService`] once one of the flows
//! here has resolved a [`User`](crate::server::model::user::User).

use sea_orm::DatabaseConnection;

use crate::server::media::MediaStore;

pub mod google;
pub mod login;
pub mod password;
pub mod register;
pub mod token;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub media: &'a dyn MediaStore,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, media: &'a dyn MediaStore) -> Self {
        Self { db, media }
    }
}
