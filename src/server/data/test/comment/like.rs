use super::*;

/// Tests liking and unliking a comment.
///
/// Expected: like set holds the user once, then is empty after unlike
#[tokio::test]
async fn like_set_semantics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let comment = factory::comment::create_comment(db, author.id, post.id).await?;
    let fan = factory::user::create_user(db).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.like(comment.id, fan.id).await?);
    assert!(!repo.like(comment.id, fan.id).await?);
    assert_eq!(
        repo.find_by_id(comment.id).await?.unwrap().likes,
        vec![fan.id]
    );

    assert!(repo.unlike(comment.id, fan.id).await?);
    assert!(repo.find_by_id(comment.id).await?.unwrap().likes.is_empty());

    Ok(())
}
