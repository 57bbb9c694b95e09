use super::*;

/// Tests deleting the notifications produced by one action.
///
/// Verifies that only notifications with the same recipient, actor, kind
/// and post are removed.
///
/// Expected: Ok(ids) of the matching like notification only
#[tokio::test]
async fn deletes_only_matching() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let fan = factory::user::create_user(db).await?;
    let like = factory::notification::NotificationFactory::new(db, author.id, fan.id)
        .kind(NotificationKind::Like)
        .post(post.id)
        .build()
        .await?;
    let comment = factory::notification::NotificationFactory::new(db, author.id, fan.id)
        .kind(NotificationKind::Comment)
        .post(post.id)
        .build()
        .await?;
    let follow = factory::notification::create_notification(db, author.id, fan.id).await?;

    let repo = NotificationRepository::new(db);

    let deleted = repo
        .delete_matching(author.id, fan.id, NotificationKind::Like, Some(post.id))
        .await?;
    assert_eq!(deleted, vec![like.id]);

    let deleted = repo
        .delete_matching(author.id, fan.id, NotificationKind::Follow, None)
        .await?;
    assert_eq!(deleted, vec![follow.id]);

    assert!(repo.find_by_id(comment.id).await?.is_some());
    assert!(repo
        .delete_matching(author.id, fan.id, NotificationKind::Like, Some(post.id))
        .await?
        .is_empty());

    Ok(())
}
