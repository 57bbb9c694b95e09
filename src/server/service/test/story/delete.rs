use super::*;

/// Tests that only the owner can delete a story, and that its media is removed.
///
/// Expected: Forbidden for another user, then the story and its file are gone
#[tokio::test]
async fn owner_deletes_story_and_media() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let owner = User::from_entity(factory::user::create_user(db).await?);
    let other = User::from_entity(factory::user::create_user(db).await?);
    let service = StoryService::new(db, &harness.cache, &harness.media);

    let story = service
        .create(&owner, Some(png_upload(b"story")))
        .await?;
    assert!(harness.stored_file_exists(&story.media.public_id));

    match service.delete(&other, story.id).await {
        Err(AppError::Forbidden(msg)) => {
            assert_eq!(msg, "You are not authorized to delete this story")
        }
        other => panic!("expected Forbidden, got {:?}", other),
    }

    service.delete(&owner, story.id).await?;

    assert!(!harness.stored_file_exists(&story.media.public_id));
    assert!(service.get_by_user(owner.id).await?.is_empty());

    Ok(())
}
