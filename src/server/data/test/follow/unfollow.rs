use super::*;

/// Tests removing a follow edge.
///
/// Expected: Ok(true) for an existing edge, Ok(false) once it is gone
#[tokio::test]
async fn removes_existing_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    factory::helpers::create_follow(db, ana.id, bob.id).await?;

    let repo = FollowRepository::new(db);

    assert!(repo.unfollow(ana.id, bob.id).await?);
    assert!(!repo.unfollow(ana.id, bob.id).await?);
    assert!(!repo.is_following(ana.id, bob.id).await?);

    Ok(())
}
