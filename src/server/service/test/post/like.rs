use super::*;

/// Tests liking another user's post.
///
/// Expected: like recorded once, author notified once
#[tokio::test]
async fn like_notifies_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let fan = User::from_entity(factory::user::create_user(db).await?);
    let mut events = harness.subscribe(author.id).await;
    let service = PostService::new(db, &harness.cache, &harness.hub, &harness.media);

    let liked = service.like(&fan, post.id).await?;
    assert_eq!(liked.likes, vec![fan.id]);
    assert!(matches!(
        events.try_recv(),
        Ok(ServerEvent::NewNotification(_))
    ));

    service.like(&fan, post.id).await?;
    assert!(events.try_recv().is_err());

    Ok(())
}

/// Tests liking one's own post.
///
/// Expected: like recorded without a notification
#[tokio::test]
async fn self_like_is_silent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let author = User::from_entity(author);
    let mut events = harness.subscribe(author.id).await;

    let liked = PostService::new(db, &harness.cache, &harness.hub, &harness.media)
        .like(&author, post.id)
        .await?;

    assert_eq!(liked.likes, vec![author.id]);
    assert!(events.try_recv().is_err());

    Ok(())
}

/// Tests unliking retracts the like notification.
///
/// Expected: empty like set and a `remove_notification` event
#[tokio::test]
async fn unlike_retracts_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let fan = User::from_entity(factory::user::create_user(db).await?);
    let service = PostService::new(db, &harness.cache, &harness.hub, &harness.media);

    service.like(&fan, post.id).await?;
    let mut events = harness.subscribe(author.id).await;

    let unliked = service.unlike(&fan, post.id).await?;

    assert!(unliked.likes.is_empty());
    assert!(matches!(
        events.try_recv(),
        Ok(ServerEvent::RemoveNotification(_))
    ));

    Ok(())
}

/// Tests reacting to a missing post.
///
/// Expected: Err(BadRequest("Post not found"))
#[tokio::test]
async fn missing_post_is_bad_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let fan = User::from_entity(factory::user::create_user(db).await?);

    match PostService::new(db, &harness.cache, &harness.hub, &harness.media)
        .like(&fan, 4242)
        .await
    {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Post not found"),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}
