use super::*;

const BOUNDARY: &str = "murmur-test-boundary";

fn multipart_post(cookie: &str, content: &str, media: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"content\"\r\n\r\n{content}\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"media\"; filename=\"big.png\"\r\n\
         Content-Type: image/png\r\n\r\n",
        b = BOUNDARY,
        content = content
    )
    .into_bytes();
    body.extend_from_slice(media);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/api/posts")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .header(header::COOKIE, cookie)
        .body(Body::from(body))
        .unwrap()
}

/// Tests creating a post without a session.
///
/// Expected: 401 "No token provided"
#[tokio::test]
async fn requires_authentication() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/posts",
            None,
            r#"{"content":"hello world"}"#,
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "No token provided");
}

/// Tests creating a post with too little content.
///
/// Expected: 400 with the content issue
#[tokio::test]
async fn short_content_returns_issue_list() {
    let app = TestApp::new().await;
    let (_, cookie) = app.login_as("gina").await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/posts",
            Some(&cookie),
            r#"{"content":"hey"}"#,
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "Content of min length 5 is required");
    assert_eq!(body["errors"][0]["field"], "content");
}

/// Tests creating a post and listing it.
///
/// Expected: 201 with the post, then the list envelope contains it
#[tokio::test]
async fn created_post_is_listed() {
    let app = TestApp::new().await;
    let (user, cookie) = app.login_as("hank").await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/posts",
            Some(&cookie),
            r#"{"content":"hello world"}"#,
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["data"]["content"], "hello world");
    let post_id = body["data"]["id"].clone();

    let (status, body) = app
        .send(empty_request(Method::GET, "/api/posts", None))
        .await;
    assert_eq!(status, StatusCode::OK);
    let posts = body["data"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["id"], post_id);
    assert_eq!(posts[0]["author"]["id"], user.id);
}

/// Tests uploading media past the request body limit.
///
/// Expected: 400 "File too large" rather than a malformed-body error
#[tokio::test]
async fn oversized_media_is_too_large() {
    let app = TestApp::new().await;
    let (_, cookie) = app.login_as("iris").await;
    let media = vec![0u8; MAX_UPLOAD_BYTES + 5 * 1024 * 1024];

    let (status, body) = app
        .send(multipart_post(&cookie, "big upload", &media))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "File too large");
}

/// Tests uploading media just over the per-file limit but within the body limit.
///
/// Expected: 400 "File too large"
#[tokio::test]
async fn media_over_file_limit_is_too_large() {
    let app = TestApp::new().await;
    let (_, cookie) = app.login_as("jack").await;
    let media = vec![0u8; MAX_UPLOAD_BYTES + 1];

    let (status, body) = app
        .send(multipart_post(&cookie, "big upload", &media))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "File too large");
}
