use super::*;

/// Tests the cached post detail is refreshed after writes.
///
/// Verifies that likes and new comments invalidate `post:{id}` so the next
/// read reflects them.
///
/// Expected: detail shows the like and the comment after the writes
#[tokio::test]
async fn detail_reflects_writes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let fan = User::from_entity(factory::user::create_user(db).await?);
    let posts = PostService::new(db, &harness.cache, &harness.hub, &harness.media);

    let detail = posts.get_detail(post.id).await?;
    assert!(detail.post.likes.is_empty());
    assert!(detail.comments.is_empty());

    posts.like(&fan, post.id).await?;
    CommentService::new(db, &harness.cache, &harness.hub)
        .create(&fan, post.id, "nice one".to_string())
        .await?;

    let detail = posts.get_detail(post.id).await?;
    assert_eq!(detail.post.likes, vec![fan.id]);
    assert_eq!(detail.post.comment_count, 1);
    assert_eq!(detail.comments.len(), 1);

    Ok(())
}

/// Tests a missing post.
///
/// Expected: Err(NotFound("Post not found"))
#[tokio::test]
async fn missing_post_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    match PostService::new(db, &harness.cache, &harness.hub, &harness.media)
        .get_detail(4242)
        .await
    {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Post not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
