use super::*;

/// Tests that a created notification is pushed to the recipient's room.
///
/// Expected: one `new_notification` event carrying the stored notification
#[tokio::test]
async fn pushes_new_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let fan = factory::user::create_user_named(db, "fan").await?;
    let mut events = harness.subscribe(author.id).await;
    let mut bystander = harness.subscribe(fan.id).await;

    let notification = NotificationService::new(db, &harness.hub)
        .create(CreateNotificationParam {
            user_id: author.id,
            from_id: fan.id,
            kind: NotificationKind::Like,
            post_id: Some(post.id),
        })
        .await?;

    match events.try_recv() {
        Ok(ServerEvent::NewNotification(dto)) => {
            assert_eq!(dto.id, notification.id);
            assert_eq!(dto.kind, "like");
            assert_eq!(dto.from.username, "fan");
        }
        other => panic!("expected new_notification, got {:?}", other),
    }
    assert!(bystander.try_recv().is_err());

    Ok(())
}

/// Tests the feed and read markers through the service.
///
/// Expected: feed contains the notification, mark-all counts only unread ones
#[tokio::test]
async fn marks_notifications_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let owner = factory::user::create_user(db).await?;
    let actor = factory::user::create_user(db).await?;
    let first = factory::notification::create_notification(db, owner.id, actor.id).await?;
    factory::notification::create_notification(db, owner.id, actor.id).await?;

    let service = NotificationService::new(db, &harness.hub);

    assert_eq!(service.get_recent(owner.id).await?.len(), 2);
    assert_eq!(service.mark_read(first.id, actor.id).await?, 0);
    assert_eq!(service.mark_read(first.id, owner.id).await?, 1);
    assert_eq!(service.mark_all_read(owner.id).await?, 1);

    Ok(())
}
