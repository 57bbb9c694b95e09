use super::*;
use chrono::{Duration, Utc};

/// Tests viewing and liking a story.
///
/// Expected: viewer and liker recorded once, unlike clears the like
#[tokio::test]
async fn records_views_and_likes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let owner = factory::user::create_user(db).await?;
    let story = factory::story::create_story(db, owner.id).await?;
    let viewer = User::from_entity(factory::user::create_user(db).await?);
    let service = StoryService::new(db, &harness.cache, &harness.media);

    service.get_all().await?;

    service.view(&viewer, story.id).await?;
    let viewed = service.view(&viewer, story.id).await?;
    assert_eq!(viewed.views, vec![viewer.id]);

    let liked = service.like(&viewer, story.id).await?;
    assert_eq!(liked.likes, vec![viewer.id]);
    assert_eq!(service.get_all().await?[0].likes, vec![viewer.id]);

    let unliked = service.unlike(&viewer, story.id).await?;
    assert!(unliked.likes.is_empty());

    Ok(())
}

/// Tests reacting to an expired story.
///
/// Expected: Err(NotFound("Story not found"))
#[tokio::test]
async fn expired_story_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let owner = factory::user::create_user(db).await?;
    let story = factory::story::StoryFactory::new(db, owner.id)
        .created_at(Utc::now() - Duration::hours(30))
        .expires_at(Utc::now() - Duration::hours(6))
        .build()
        .await?;
    let viewer = User::from_entity(factory::user::create_user(db).await?);

    match StoryService::new(db, &harness.cache, &harness.media)
        .view(&viewer, story.id)
        .await
    {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Story not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
