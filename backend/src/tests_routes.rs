//! Route tests driven through the router in-process.

use crate::config::Config;
use crate::routes::router;
use crate::state::AppState;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::PathBuf;
use tower::ServiceExt;

fn test_app() -> Router {
    test_app_with(Config::default())
}

fn test_app_with(config: Config) -> Router {
    router(AppState::new(&config), &config)
}

/// Build a `key=value&...` query string
fn query(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::post("/token")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap()
}

async fn login(app: &Router, username: &str) -> String {
    let (status, body) = send(app, login_request(username, "password")).await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_string()
}

fn calculate_request(expression: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(format!(
        "/calculate?{}",
        query(&[("expression", expression)])
    ));
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_root_redirects_to_static_index() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn test_get_activities() {
    let app = test_app();
    let (status, body) = send(&app, Request::get("/activities").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 10);
    assert_eq!(body["Chess Club"]["max_participants"], 12);
}

#[tokio::test]
async fn test_signup_for_activity() {
    let app = test_app();
    let uri = format!(
        "/activities/Art%20Club/signup?{}",
        query(&[("email", "new@mergington.edu")])
    );
    let (status, body) = send(&app, Request::post(uri).body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed up new@mergington.edu for Art Club");

    let (_, roster) = send(&app, Request::get("/activities").body(Body::empty()).unwrap()).await;
    assert_eq!(roster["Art Club"]["participants"][0], "new@mergington.edu");
}

#[tokio::test]
async fn test_signup_duplicate() {
    let app = test_app();
    let uri = format!(
        "/activities/Chess%20Club/signup?{}",
        query(&[("email", "michael@mergington.edu")])
    );
    let (status, body) = send(&app, Request::post(uri).body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "Student already registered for this activity.");
}

#[tokio::test]
async fn test_signup_unknown_activity() {
    let app = test_app();
    let uri = "/activities/Knitting/signup?email=a%40mergington.edu";
    let (status, body) = send(&app, Request::post(uri).body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn test_login_successful() {
    let app = test_app();
    let (status, body) = send(&app, login_request("testuser", "password")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].is_string());
    assert_eq!(body["token_type"], "bearer");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(login_request("testuser", "wrongpassword"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

#[tokio::test]
async fn test_get_user_info_with_token() {
    let app = test_app();
    let token = login(&app, "testuser").await;
    let request = Request::get("/users/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "testuser");
    assert_eq!(body["email"], "testuser@mergington.edu");
}

#[tokio::test]
async fn test_get_user_info_without_token() {
    let app = test_app();
    let (status, body) = send(&app, Request::get("/users/me").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Not authenticated");
}

#[tokio::test]
async fn test_get_user_info_invalid_token() {
    let app = test_app();
    let request = Request::get("/users/me")
        .header(header::AUTHORIZATION, "Bearer invalidtoken")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Invalid authentication credentials");
}

#[tokio::test]
async fn test_calculate_expression() {
    let app = test_app();
    let token = login(&app, "testuser").await;
    let (status, body) = send(&app, calculate_request("3 + 4 * 2", Some(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["expression"], "3 + 4 * 2");
    assert_eq!(body["result"], 11.0);
}

#[tokio::test]
async fn test_calculate_empty_expression_is_zero() {
    let app = test_app();
    let token = login(&app, "testuser").await;
    let (status, body) = send(&app, calculate_request("", Some(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 0.0);
}

#[tokio::test]
async fn test_calculate_malformed_expression() {
    let app = test_app();
    let token = login(&app, "testuser").await;
    let (status, body) = send(&app, calculate_request("3++4", Some(&token))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Error calculating expression: Invalid expression: consecutive operators ++"
    );
}

#[tokio::test]
async fn test_calculate_division_by_zero() {
    let app = test_app();
    let token = login(&app, "testuser").await;
    let (status, body) = send(&app, calculate_request("5/0", Some(&token))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Error calculating expression: Division by zero");
}

#[tokio::test]
async fn test_calculate_requires_token() {
    let app = test_app();
    let (status, _) = send(&app, calculate_request("1+1", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_without_email_is_json_error() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::post("/activities/Chess%20Club/signup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["detail"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_login_missing_password_is_json_error() {
    let app = test_app();
    let request = Request::post("/token")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "username": "a" }).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["detail"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn test_calculate_without_expression_is_json_error() {
    let app = test_app();
    let token = login(&app, "testuser").await;
    let request = Request::post("/calculate")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("expression"));
}

#[tokio::test]
async fn test_calculate_overflow_is_rejected_not_null() {
    let app = test_app();
    let token = login(&app, "testuser").await;
    // 400 nines overflows to infinity; inf - inf is NaN
    let huge = "9".repeat(400);
    let expression = format!("{}-{}", huge, huge);
    let (status, body) = send(&app, calculate_request(&expression, Some(&token))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Error calculating expression: result NaN is not a finite number"
    );
}

#[tokio::test]
async fn test_calculate_infinite_result_is_rejected() {
    let app = test_app();
    let token = login(&app, "testuser").await;
    let (status, body) = send(&app, calculate_request(&"9".repeat(400), Some(&token))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("not a finite number"));
}

#[tokio::test]
async fn test_static_index_is_served() {
    let app = test_app_with(Config {
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../static")),
        ..Config::default()
    });
    let response = app
        .oneshot(Request::get("/static/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("Mergington High School Activities"));
}
