use super::*;

/// Tests registering twice with the same email.
///
/// Expected: 201 then 400 "Email or username already in use"
#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/auth/register",
            None,
            r#"{"username":"erin","email":"erin@example.com","password":"secret1"}"#,
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["message"], "Registered successfully");

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/auth/register",
            None,
            r#"{"username":"erin2","email":"erin@example.com","password":"secret1"}"#,
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "Email or username already in use");
}

/// Tests registering with every field invalid.
///
/// Expected: 400 listing email, password and username issues
#[tokio::test]
async fn invalid_fields_return_issue_list() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/auth/register",
            None,
            r#"{"username":"ab","email":"nope","password":"123"}"#,
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|issue| issue["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "password", "username"]);
}
