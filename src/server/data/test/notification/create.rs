use super::*;

/// Tests creating a notification and loading it populated.
///
/// Expected: actor summary and post slice are attached, unread by default
#[tokio::test]
async fn creates_populated_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let fan = factory::user::create_user_named(db, "fan").await?;

    let repo = NotificationRepository::new(db);
    let created = repo
        .create(CreateNotificationParam {
            user_id: author.id,
            from_id: fan.id,
            kind: NotificationKind::Like,
            post_id: Some(post.id),
        })
        .await?;

    let notification = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(notification.user_id, author.id);
    assert_eq!(notification.from.username, "fan");
    assert_eq!(notification.kind, NotificationKind::Like);
    assert_eq!(notification.post.unwrap().id, post.id);
    assert!(!notification.is_read);

    Ok(())
}
