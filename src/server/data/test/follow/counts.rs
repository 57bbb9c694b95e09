use super::*;

/// Tests follower and following counts.
///
/// Expected: counts reflect the direction of each edge
#[tokio::test]
async fn counts_each_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let cid = factory::user::create_user(db).await?;
    factory::helpers::create_follow(db, bob.id, ana.id).await?;
    factory::helpers::create_follow(db, cid.id, ana.id).await?;
    factory::helpers::create_follow(db, ana.id, bob.id).await?;

    let repo = FollowRepository::new(db);

    assert_eq!(repo.follower_count(ana.id).await?, 2);
    assert_eq!(repo.following_count(ana.id).await?, 1);
    assert_eq!(repo.follower_count(cid.id).await?, 0);

    Ok(())
}
