use super::*;

/// Tests linking a Google identity to an existing account.
///
/// Expected: the account is then found by its Google id
#[tokio::test]
async fn links_google_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .auth_provider(AuthProvider::Google)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.find_by_google_id("g-123").await?.is_none());

    repo.set_google_id(user.id, "g-123").await?;

    let linked = repo.find_by_google_id("g-123").await?.unwrap();
    assert_eq!(linked.id, user.id);

    Ok(())
}
