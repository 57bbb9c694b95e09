use super::*;

/// Tests fetching a post with a non-numeric id.
///
/// Expected: 400 "Invalid post ID"
#[tokio::test]
async fn rejects_non_numeric_id() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(empty_request(Method::GET, "/api/posts/abc", None))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "Invalid post ID");
}

/// Tests fetching a post that does not exist.
///
/// Expected: 404 "Post not found"
#[tokio::test]
async fn missing_post_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(empty_request(Method::GET, "/api/posts/4242", None))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "Post not found");
}

/// Tests fetching an existing post with its comments.
///
/// Expected: 200 envelope carrying the post and an empty comment list
#[tokio::test]
async fn returns_post_detail() {
    let app = TestApp::new().await;
    let (user, _) = app.login_as("kate").await;
    let post = factory::post::create_post(&app.db, user.id).await.unwrap();

    let (status, body) = app
        .send(empty_request(
            Method::GET,
            &format!("/api/posts/{}", post.id),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["data"]["id"], post.id);
    assert_eq!(body["data"]["comments"], Value::Array(Vec::new()));
}
