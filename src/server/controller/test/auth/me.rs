use super::*;

/// Tests the current-user endpoint without a session cookie.
///
/// Expected: 401 "No token provided"
#[tokio::test]
async fn requires_session_cookie() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(empty_request(Method::GET, "/api/auth/me", None))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "No token provided");
}

/// Tests the current-user endpoint with a tampered token.
///
/// Expected: 401 "Invalid or expired token"
#[tokio::test]
async fn rejects_tampered_token() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(empty_request(
            Method::GET,
            "/api/auth/me",
            Some("token=not.a.jwt"),
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "Invalid or expired token");
}

/// Tests the current-user endpoint with a valid session.
///
/// Expected: 200 envelope with the caller's id and username
#[tokio::test]
async fn returns_current_user() {
    let app = TestApp::new().await;
    let (user, cookie) = app.login_as("frank").await;

    let (status, body) = app
        .send(empty_request(Method::GET, "/api/auth/me", Some(&cookie)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["data"]["id"], user.id);
    assert_eq!(body["data"]["username"], "frank");
}
