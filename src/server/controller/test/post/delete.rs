use super::*;

/// Tests deleting someone else's post.
///
/// Expected: 403 and the post still readable
#[tokio::test]
async fn non_author_is_forbidden() {
    let app = TestApp::new().await;
    let (author, _) = app.login_as("liam").await;
    let (_, other_cookie) = app.login_as("mona").await;
    let post = factory::post::create_post(&app.db, author.id).await.unwrap();
    let uri = format!("/api/posts/{}", post.id);

    let (status, body) = app
        .send(empty_request(Method::DELETE, &uri, Some(&other_cookie)))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error(&body, "You are not authorized to delete this post");

    let (status, _) = app.send(empty_request(Method::GET, &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
}

/// Tests deleting a post that does not exist.
///
/// Expected: 404 "Post not found"
#[tokio::test]
async fn missing_post_is_not_found() {
    let app = TestApp::new().await;
    let (_, cookie) = app.login_as("nina").await;

    let (status, body) = app
        .send(empty_request(Method::DELETE, "/api/posts/4242", Some(&cookie)))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "Post not found");
}

/// Tests the author deleting their post.
///
/// Expected: 200 message, then 404 on read
#[tokio::test]
async fn author_deletes_post() {
    let app = TestApp::new().await;
    let (author, cookie) = app.login_as("owen").await;
    let post = factory::post::create_post(&app.db, author.id).await.unwrap();
    let uri = format!("/api/posts/{}", post.id);

    let (status, body) = app
        .send(empty_request(Method::DELETE, &uri, Some(&cookie)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["message"], "Post deleted successfully");

    let (status, _) = app.send(empty_request(Method::GET, &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests deleting without a session.
///
/// Expected: 401 before any lookup
#[tokio::test]
async fn requires_authentication() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(empty_request(Method::DELETE, "/api/posts/1", None))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "No token provided");
}
