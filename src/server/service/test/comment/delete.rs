use super::*;

/// Tests that only the author can delete a comment.
///
/// Expected: Forbidden for another user, then Ok for the author and NotFound afterwards
#[tokio::test]
async fn only_author_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let comment = factory::comment::create_comment(db, author.id, post.id).await?;
    let author = User::from_entity(author);
    let other = User::from_entity(factory::user::create_user(db).await?);
    let service = CommentService::new(db, &harness.cache, &harness.hub);

    match service.delete(&other, comment.id).await {
        Err(AppError::Forbidden(msg)) => {
            assert_eq!(msg, "You are not authorized to delete this comment")
        }
        other => panic!("expected Forbidden, got {:?}", other),
    }

    service.delete(&author, comment.id).await?;
    assert!(service.get_by_post(post.id).await?.is_empty());

    match service.delete(&author, comment.id).await {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Comment not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
