use super::*;

/// Tests batch loading of author summaries.
///
/// Verifies that duplicate ids are collapsed and unknown ids are absent.
///
/// Expected: Ok(HashMap) with one entry per existing user
#[tokio::test]
async fn loads_summaries_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::user::UserFactory::new(db)
        .username("ana")
        .avatar("/media/avatars/ana.png")
        .build()
        .await?;
    let bob = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let summaries = repo
        .find_summaries(vec![ana.id, bob.id, ana.id, 9999])
        .await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[&ana.id].username, "ana");
    assert_eq!(
        summaries[&ana.id].avatar.as_deref(),
        Some("/media/avatars/ana.png")
    );
    assert!(!summaries.contains_key(&9999));

    Ok(())
}
