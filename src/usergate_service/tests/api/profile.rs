use usergate_adapters::auth::{TokenKind, generate_token};
use usergate_core::UserId;

use crate::helpers::{TestApp, get_random_email};

async fn login(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .post_session(&serde_json::json!({ "email": email, "password": password }))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    body["token"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn should_return_200_with_own_profile() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let id = app.create_user("Ana", &email, "longpass1").await;
    let token = login(&app, &email, "longpass1").await;

    let response = app.get_me(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], email.as_str());
}

#[tokio::test]
async fn should_return_401_without_valid_token() {
    let app = TestApp::new().await;

    assert_eq!(app.get_me(None).await.status().as_u16(), 401);
    assert_eq!(
        app.get_me(Some("invalid_token")).await.status().as_u16(),
        401
    );

    let foreign =
        generate_token(&UserId::new(), TokenKind::Access, 600, b"another-secret").unwrap();
    assert_eq!(app.get_me(Some(&foreign)).await.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_404_for_unknown_user() {
    let app = TestApp::new().await;
    let token = app.session_issuer.issue_access_token(&UserId::new()).unwrap();

    let response = app.get_me(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_return_401_for_refresh_token() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.create_user("Ana", &email, "longpass1").await;

    let response = app
        .post_refresh_token(&serde_json::json!({ "email": email, "password": "longpass1" }))
        .await;
    let cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    let refresh_token = cookie
        .trim_start_matches("refreshToken=")
        .split(';')
        .next()
        .unwrap();

    let response = app.get_me(Some(refresh_token)).await;

    assert_eq!(response.status().as_u16(), 401);
}
