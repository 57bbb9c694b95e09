use super::*;

/// Tests listing posts newest first with counts.
///
/// Expected: Ok(Vec<Post>) ordered by creation time descending, with like
/// and comment counts per post
#[tokio::test]
async fn lists_newest_first_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reader = factory::user::create_user(db).await?;
    let older = factory::post::PostFactory::new(db, author.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    let newer = factory::post::create_post(db, author.id).await?;
    factory::comment::create_comment(db, reader.id, older.id).await?;
    factory::comment::create_comment(db, author.id, older.id).await?;

    let repo = PostRepository::new(db);
    repo.like(older.id, reader.id).await?;

    let posts = repo.get_all().await?;

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, newer.id);
    assert_eq!(posts[1].id, older.id);
    assert_eq!(posts[1].likes, vec![reader.id]);
    assert_eq!(posts[1].comment_count, 2);
    assert_eq!(posts[0].comment_count, 0);

    Ok(())
}

/// Tests listing one author's posts.
///
/// Expected: only posts by that author
#[tokio::test]
async fn filters_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    factory::helpers::create_post_with_author(db).await?;

    let repo = PostRepository::new(db);
    let posts = repo.get_by_author(author.id).await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, post.id);

    Ok(())
}
