use super::*;

/// Tests creating a comment.
///
/// Expected: Ok(Model) that is found with its author populated
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let commenter = factory::user::create_user_named(db, "bob").await?;

    let repo = CommentRepository::new(db);
    let created = repo
        .create(CreateCommentParam {
            author_id: commenter.id,
            post_id: post.id,
            content: "nice".to_string(),
        })
        .await?;

    let comment = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.author.username, "bob");
    assert_eq!(comment.content, "nice");

    Ok(())
}
