use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use jenkins_demo::routes::register_routes;
use tower::ServiceExt;

/// Sends `GET /` and returns the status, content type and body text.
async fn get_home(app: Router) -> (StatusCode, String, String) {
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .expect("should have gotten a response");

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .expect("Missing content-type")
        .to_str()
        .unwrap()
        .to_owned();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("should have read body bytes");

    (
        status,
        content_type,
        String::from_utf8(bytes.to_vec()).expect("body should be UTF-8"),
    )
}

#[tokio::test]
async fn home_returns_greeting() {
    let (status, content_type, body) = get_home(register_routes()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/plain; charset=utf-8");
    assert!(body.contains("Hello Jenkins Demo!"), "unexpected body: {body}");
}

#[tokio::test]
async fn home_greeting_is_stable_across_calls() {
    let app = register_routes();

    for _ in 0..3 {
        let (status, _, body) = get_home(app.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Hello Jenkins Demo!"));
    }
}
