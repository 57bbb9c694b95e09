use super::*;

/// Tests commenting on another user's post.
///
/// Expected: post author receives a `comment` notification
#[tokio::test]
async fn notifies_post_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let commenter = User::from_entity(factory::user::create_user(db).await?);
    let mut events = harness.subscribe(author.id).await;

    let comment = CommentService::new(db, &harness.cache, &harness.hub)
        .create(&commenter, post.id, "great".to_string())
        .await?;

    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.author.id, commenter.id);
    match events.try_recv() {
        Ok(ServerEvent::NewNotification(dto)) => assert_eq!(dto.kind, "comment"),
        other => panic!("expected comment notification, got {:?}", other),
    }

    Ok(())
}

/// Tests commenting on one's own post and on a missing post.
///
/// Expected: no notification for self, NotFound for a missing post
#[tokio::test]
async fn self_comment_and_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let author = User::from_entity(author);
    let mut events = harness.subscribe(author.id).await;
    let service = CommentService::new(db, &harness.cache, &harness.hub);

    service
        .create(&author, post.id, "thanks all".to_string())
        .await?;
    assert!(events.try_recv().is_err());

    match service.create(&author, 4242, "hello".to_string()).await {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Post not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(matches!(
        service.create(&author, post.id, String::new()).await,
        Err(AppError::Validation(_))
    ));

    Ok(())
}

/// Tests the cached comment list is invalidated by new comments.
///
/// Expected: list grows after the cache was populated, newest first
#[tokio::test]
async fn list_reflects_new_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let author = User::from_entity(author);
    let service = CommentService::new(db, &harness.cache, &harness.hub);

    assert!(service.get_by_post(post.id).await?.is_empty());

    let comment = service
        .create(&author, post.id, "first!".to_string())
        .await?;

    let comments = service.get_by_post(post.id).await?;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, comment.id);
    assert!(matches!(
        service.get_by_post(4242).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
