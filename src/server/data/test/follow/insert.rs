use super::*;

/// Tests adding a follow edge.
///
/// Verifies that the edge is directed and that following twice keeps a
/// single edge.
///
/// Expected: Ok(true) then Ok(false), with one follower counted
#[tokio::test]
async fn follow_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;

    let repo = FollowRepository::new(db);

    assert!(repo.follow(ana.id, bob.id).await?);
    assert!(!repo.follow(ana.id, bob.id).await?);

    assert!(repo.is_following(ana.id, bob.id).await?);
    assert!(!repo.is_following(bob.id, ana.id).await?);
    assert_eq!(repo.follower_count(bob.id).await?, 1);

    Ok(())
}
