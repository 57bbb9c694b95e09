use super::*;

/// Tests mention notifications.
///
/// Verifies that existing mentioned users are notified once each, while the
/// author and unknown names are skipped.
///
/// Expected: one `mention` notification for bob only
#[tokio::test]
async fn notifies_mentioned_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let author = factory::user::create_user_named(db, "ana").await?;
    let bob = factory::user::create_user_named(db, "bob").await?;
    let post = factory::post::create_post(db, author.id).await?;
    let mut author_events = harness.subscribe(author.id).await;
    let mut bob_events = harness.subscribe(bob.id).await;

    let service = NotificationService::new(db, &harness.hub);
    service
        .notify_mentions("hi @bob and @bob, I am @ana, not @nobody", author.id, post.id)
        .await;

    match bob_events.try_recv() {
        Ok(ServerEvent::NewNotification(dto)) => {
            assert_eq!(dto.kind, "mention");
            assert_eq!(dto.post.map(|p| p.id), Some(post.id));
        }
        other => panic!("expected mention notification, got {:?}", other),
    }
    assert!(bob_events.try_recv().is_err());
    assert!(author_events.try_recv().is_err());
    assert_eq!(service.get_recent(bob.id).await?.len(), 1);

    Ok(())
}
