use super::*;

/// Tests liking and unliking a comment through the service.
///
/// Expected: like set updated, and a cached list reflects it
#[tokio::test]
async fn like_updates_cached_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let comment = factory::comment::create_comment(db, author.id, post.id).await?;
    let fan = User::from_entity(factory::user::create_user(db).await?);
    let service = CommentService::new(db, &harness.cache, &harness.hub);

    service.get_by_post(post.id).await?;

    let liked = service.like(&fan, comment.id).await?;
    assert_eq!(liked.likes, vec![fan.id]);
    assert_eq!(service.get_by_post(post.id).await?[0].likes, vec![fan.id]);

    let unliked = service.unlike(&fan, comment.id).await?;
    assert!(unliked.likes.is_empty());

    match service.like(&fan, comment.id + 1000).await {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Comment not found"),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}
