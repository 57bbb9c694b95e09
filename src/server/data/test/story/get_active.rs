use super::*;

/// Tests that expired stories are hidden.
///
/// Verifies that list and single lookups both skip a story whose expiry
/// has passed, while live stories are returned newest first.
///
/// Expected: only live stories, newest first
#[tokio::test]
async fn hides_expired_stories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let older = factory::story::StoryFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::story::create_story(db, other.id).await?;
    let expired = factory::story::StoryFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::hours(30))
        .expires_at(Utc::now() - Duration::hours(6))
        .build()
        .await?;

    let repo = StoryRepository::new(db);

    let all: Vec<i32> = repo.get_active().await?.iter().map(|s| s.id).collect();
    assert_eq!(all, vec![newer.id, older.id]);

    let mine: Vec<i32> = repo
        .get_active_by_user(user.id)
        .await?
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(mine, vec![older.id]);

    assert!(repo.find_active(expired.id).await?.is_none());
    assert!(repo.find_active(older.id).await?.is_some());

    Ok(())
}
