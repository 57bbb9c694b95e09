use super::*;
use crate::server::{
    cache::keys,
    model::user::Profile,
    service::user::UserService,
};

/// Tests that only the author can delete a post.
///
/// Expected: Forbidden for another user, NotFound for a missing post
#[tokio::test]
async fn only_author_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let other = User::from_entity(factory::user::create_user(db).await?);
    let service = PostService::new(db, &harness.cache, &harness.hub, &harness.media);

    match service.delete(&other, post.id).await {
        Err(AppError::Forbidden(msg)) => {
            assert_eq!(msg, "You are not authorized to delete this post")
        }
        other => panic!("expected Forbidden, got {:?}", other),
    }
    assert!(matches!(
        service.delete(&other, post.id + 1000).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a post releases its media unless another post shares it.
///
/// Expected: shared file kept after the first delete, removed after the second
#[tokio::test]
async fn releases_unshared_media() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let author = User::from_entity(factory::user::create_user(db).await?);
    let service = PostService::new(db, &harness.cache, &harness.hub, &harness.media);

    let first = service
        .create(&author, "first post".to_string(), Some(png_upload(b"same")))
        .await?;
    let second = service
        .create(&author, "second post".to_string(), Some(png_upload(b"same")))
        .await?;
    let public_id = first.media.clone().unwrap().public_id;
    assert_eq!(second.media.unwrap().public_id, public_id);

    service.delete(&author, first.id).await?;
    assert!(harness.stored_file_exists(&public_id));

    service.delete(&author, second.id).await?;
    assert!(!harness.stored_file_exists(&public_id));
    assert!(matches!(
        service.get_detail(second.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a saved post drops the savers' cached profiles.
///
/// Expected: profile cache entry gone, fresh profile no longer lists the post
#[tokio::test]
async fn invalidates_saver_profiles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let harness = Harness::new();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let author = User::from_entity(author);
    let reader = User::from_entity(factory::user::create_user(db).await?);

    let users = UserService::new(db, &harness.cache, &harness.hub);
    users.save_post(&reader, post.id).await?;
    let (profile, _) = users.get_profile(&reader.username, reader.id).await?;
    assert_eq!(profile.saved_posts, vec![post.id]);

    PostService::new(db, &harness.cache, &harness.hub, &harness.media)
        .delete(&author, post.id)
        .await?;

    let cached = harness
        .cache
        .get_json::<Profile>(&keys::user_profile(&reader.username))
        .await;
    assert!(cached.is_none());

    let (profile, _) = users.get_profile(&reader.username, reader.id).await?;
    assert!(profile.saved_posts.is_empty());

    Ok(())
}
