use super::*;

/// Tests creating a post with media.
///
/// Verifies that the media descriptor is stored in the three media columns
/// and read back with the author populated.
///
/// Expected: Ok(Post) with author, media and empty like set
#[tokio::test]
async fn creates_post_with_media() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_named(db, "ana").await?;

    let repo = PostRepository::new(db);
    let created = repo
        .create(CreatePostParam {
            author_id: author.id,
            content: "hello world".to_string(),
            media: Some(MediaDescriptor {
                url: "/media/posts/abc.mp4".to_string(),
                public_id: "posts/abc.mp4".to_string(),
                resource_type: ResourceType::Video,
            }),
        })
        .await?;

    let post = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(post.author.username, "ana");
    assert_eq!(post.content, "hello world");
    assert_eq!(post.media.unwrap().resource_type, ResourceType::Video);
    assert!(post.likes.is_empty());
    assert_eq!(post.comment_count, 0);
    assert!(repo.media_in_use("posts/abc.mp4").await?);

    Ok(())
}
