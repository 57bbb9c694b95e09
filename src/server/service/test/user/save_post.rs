use super::*;

/// Tests saving and unsaving posts.
///
/// Expected: saved ids appear on the profile and disappear after unsave
#[tokio::test]
async fn saved_posts_show_on_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let user = User::from_entity(factory::user::create_user_named(db, "ana").await?);
    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let service = UserService::new(db, &harness.cache, &harness.hub);

    service.get_profile("ana", user.id).await?;

    assert_eq!(service.save_post(&user, post.id).await?, vec![post.id]);
    let (profile, _) = service.get_profile("ana", user.id).await?;
    assert_eq!(profile.saved_posts, vec![post.id]);

    assert!(service.unsave_post(&user, post.id).await?.is_empty());
    let (profile, _) = service.get_profile("ana", user.id).await?;
    assert!(profile.saved_posts.is_empty());

    assert!(matches!(
        service.save_post(&user, post.id + 1000).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
