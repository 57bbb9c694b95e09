use super::*;

/// Tests that a user can only mark their own notification as read.
///
/// Expected: Ok(0) for someone else's notification, Ok(1) for the owner
#[tokio::test]
async fn only_marks_own_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, owner.id, stranger.id).await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.mark_read(notification.id, stranger.id).await?, 0);
    assert_eq!(repo.mark_read(notification.id, owner.id).await?, 1);
    assert!(repo.find_by_id(notification.id).await?.unwrap().is_read);

    Ok(())
}

/// Tests marking every notification as read.
///
/// Expected: only unread notifications are counted
#[tokio::test]
async fn mark_all_counts_only_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let actor = factory::user::create_user(db).await?;
    factory::notification::create_notification(db, owner.id, actor.id).await?;
    factory::notification::create_notification(db, owner.id, actor.id).await?;
    factory::notification::NotificationFactory::new(db, owner.id, actor.id)
        .read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.mark_all_read(owner.id).await?, 2);
    assert_eq!(repo.mark_all_read(owner.id).await?, 0);

    Ok(())
}
