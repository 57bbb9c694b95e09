use super::*;

/// Tests publishing a story.
///
/// Expected: story expires about 24 hours later and shows up in both lists
#[tokio::test]
async fn creates_and_lists_story() -> Result<(), AppError> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let user = User::from_entity(factory::user::create_user(db).await?);
    let service = StoryService::new(db, &harness.cache, &harness.media);

    assert!(service.get_all().await?.is_empty());

    let story = service
        .create(&user, Some(png_upload(b"story")))
        .await?;

    let lifetime = story.expires_at - story.created_at;
    assert!((lifetime.num_minutes() - 24 * 60).abs() <= 1);
    assert!(story.media.public_id.starts_with("stories/"));

    let all: Vec<i32> = service.get_all().await?.iter().map(|s| s.id).collect();
    assert_eq!(all, vec![story.id]);
    let mine: Vec<i32> = service
        .get_by_user(user.id)
        .await?
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(mine, vec![story.id]);

    Ok(())
}

/// Tests a story without media.
///
/// Expected: Err(BadRequest("Media is required"))
#[tokio::test]
async fn requires_media() -> Result<(), AppError> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let user = User::from_entity(factory::user::create_user(db).await?);

    match StoryService::new(db, &harness.cache, &harness.media)
        .create(&user, None)
        .await
    {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Media is required"),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}
