use super::*;

/// Tests deleting a post.
///
/// Verifies that comments and notifications attached to the post are
/// removed with it.
///
/// Expected: Ok(true), then the post, its comment and notification are gone
#[tokio::test]
async fn cascades_to_comments_and_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let fan = factory::user::create_user(db).await?;
    let comment = factory::comment::create_comment(db, fan.id, post.id).await?;
    let notification = factory::notification::NotificationFactory::new(db, author.id, fan.id)
        .kind(entity::notification::NotificationKind::Comment)
        .post(post.id)
        .build()
        .await?;

    let repo = PostRepository::new(db);

    assert!(repo.delete(post.id).await?);
    assert!(!repo.delete(post.id).await?);
    assert!(repo.find_by_id(post.id).await?.is_none());
    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
