use super::*;

/// Tests liking and unliking a post.
///
/// Expected: like set gains the user once and loses it on unlike
#[tokio::test]
async fn like_set_semantics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let fan = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);

    assert!(repo.like(post.id, fan.id).await?);
    assert!(!repo.like(post.id, fan.id).await?);
    assert_eq!(repo.find_by_id(post.id).await?.unwrap().likes, vec![fan.id]);

    assert!(repo.unlike(post.id, fan.id).await?);
    assert!(!repo.unlike(post.id, fan.id).await?);
    assert!(repo.find_by_id(post.id).await?.unwrap().likes.is_empty());

    Ok(())
}

/// Tests liking a post that does not exist.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn like_missing_post_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fan = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);

    assert!(repo.like(9999, fan.id).await.is_err());

    Ok(())
}
