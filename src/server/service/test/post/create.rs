use super::*;

/// Tests publishing a post with media and a mention.
///
/// Expected: stored media descriptor on the post and a mention pushed to bob
#[tokio::test]
async fn creates_post_with_media_and_mentions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let author = User::from_entity(factory::user::create_user_named(db, "ana").await?);
    let bob = factory::user::create_user_named(db, "bob").await?;
    let mut bob_events = harness.subscribe(bob.id).await;

    let post = PostService::new(db, &harness.cache, &harness.hub, &harness.media)
        .create(
            &author,
            "hello @bob".to_string(),
            Some(png_upload(b"png-bytes")),
        )
        .await?;

    assert_eq!(post.author.id, author.id);
    let media = post.media.unwrap();
    assert!(media.public_id.starts_with("posts/"));
    assert!(harness.stored_file_exists(&media.public_id));

    match bob_events.try_recv() {
        Ok(ServerEvent::NewNotification(dto)) => assert_eq!(dto.kind, "mention"),
        other => panic!("expected mention, got {:?}", other),
    }

    Ok(())
}

/// Tests content validation.
///
/// Expected: Err(Validation) for content shorter than 5 characters, nothing stored
#[tokio::test]
async fn rejects_short_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let author = User::from_entity(factory::user::create_user(db).await?);
    let service = PostService::new(db, &harness.cache, &harness.hub, &harness.media);

    let result = service.create(&author, "hey".to_string(), None).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests unsupported media.
///
/// Expected: Err(BadRequest("Unsupported file type"))
#[tokio::test]
async fn rejects_unsupported_media() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let author = User::from_entity(factory::user::create_user(db).await?);
    let mut upload = png_upload(b"%PDF");
    upload.content_type = "application/pdf".to_string();

    let result = PostService::new(db, &harness.cache, &harness.hub, &harness.media)
        .create(&author, "a document".to_string(), Some(upload))
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Unsupported file type"),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}
