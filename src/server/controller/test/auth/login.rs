use super::*;

/// Tests login with a body missing the password field.
///
/// Expected: 400 with the validation envelope naming `password`
#[tokio::test]
async fn missing_field_returns_issue_list() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/auth/login",
            None,
            r#"{"email":"a@b.com"}"#,
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "Password should be at least 6 characters");
    let issues = body["errors"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["field"], "password");
}

/// Tests login with a body that is not valid JSON.
///
/// Expected: 400 "Invalid request body"
#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(json_request(Method::POST, "/api/auth/login", None, r#"{"email":"#))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "Invalid request body");
}

/// Tests registering and then logging in with the same credentials.
///
/// Expected: 200 with the user and a `token` cookie
#[tokio::test]
async fn login_after_register_sets_cookie() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send(json_request(
            Method::POST,
            "/api/auth/register",
            None,
            r#"{"username":"carol","email":"carol@example.com","password":"secret1"}"#,
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, headers, body) = app
        .send_with_headers(json_request(
            Method::POST,
            "/api/auth/login",
            None,
            r#"{"email":"carol@example.com","password":"secret1"}"#,
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    let cookie = headers
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));
    assert_eq!(body["message"], "Login success");
    assert_eq!(body["user"]["username"], "carol");
}

/// Tests login with a wrong password.
///
/// Expected: 400 "Invalid credentials"
#[tokio::test]
async fn wrong_password_is_rejected() {
    let app = TestApp::new().await;

    app.send(json_request(
        Method::POST,
        "/api/auth/register",
        None,
        r#"{"username":"dave","email":"dave@example.com","password":"secret1"}"#,
    ))
    .await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/auth/login",
            None,
            r#"{"email":"dave@example.com","password":"wrong-one"}"#,
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "Invalid credentials");
}

/// Tests Google login without a credential.
///
/// Expected: 400 with the validation envelope, no call to Google
#[tokio::test]
async fn google_login_requires_credential() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(json_request(Method::POST, "/api/auth/login/google", None, "{}"))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "Google credential is required");
    assert_eq!(body["errors"][0]["field"], "credential");
}
