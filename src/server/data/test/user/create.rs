use super::*;

/// Tests creating a local account.
///
/// Verifies that the repository stores the credentials and assigns the
/// default `user` role.
///
/// Expected: Ok(User) with role User and the given password hash
#[tokio::test]
async fn creates_local_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: Some("$argon2id$hash".to_string()),
            google_id: None,
            avatar: None,
            auth_provider: AuthProvider::Local,
        })
        .await?;

    assert_eq!(user.username, "ana");
    assert_eq!(user.role, entity::user::Role::User);
    assert_eq!(user.password_hash.as_deref(), Some("$argon2id$hash"));
    assert_eq!(user.auth_provider, AuthProvider::Local);

    Ok(())
}

/// Tests that the unique email constraint is enforced.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "someone_else".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: None,
            google_id: None,
            avatar: None,
            auth_provider: AuthProvider::Local,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
