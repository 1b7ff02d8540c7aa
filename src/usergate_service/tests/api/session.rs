use reqwest::header::SET_COOKIE;

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_200_with_token_and_user() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let id = app.create_user("Ana", &email, "longpass1").await;

    let response = app
        .post_session(&serde_json::json!({ "email": email, "password": "longpass1" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get(SET_COOKIE).is_none());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], id.as_str());
    assert_eq!(body["user"]["name"], "Ana");
    assert_eq!(body["user"]["email"], email.as_str());
    assert!(body["user"].get("password_hash").is_none());

    let token = body["token"].as_str().unwrap();
    let claims = app.session_issuer.validate_token(token).unwrap();
    assert_eq!(claims.sub, id);
}

#[tokio::test]
async fn should_return_400_for_wrong_password_or_unknown_email() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.create_user("Ana", &email, "longpass1").await;

    let wrong_password = app
        .post_session(&serde_json::json!({ "email": email, "password": "wrong" }))
        .await;
    let unknown_email = app
        .post_session(&serde_json::json!({ "email": get_random_email(), "password": "longpass1" }))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 400);
    assert_eq!(unknown_email.status().as_u16(), 400);

    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_email: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["error"], "Invalid credentials");
}

#[tokio::test]
async fn should_return_400_if_malformed_credentials() {
    let app = TestApp::new().await;

    let test_cases = [
        serde_json::json!({ "email": "not-an-email", "password": "longpass1" }),
        serde_json::json!({ "password": "longpass1" }),
        serde_json::json!({ "email": get_random_email() }),
    ];

    for body in test_cases.iter() {
        let response = app.post_session(body).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            body
        );
    }
}

#[tokio::test]
async fn refresh_token_sets_hardened_cookie() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let id = app.create_user("Ana", &email, "longpass1").await;

    let response = app
        .post_refresh_token(&serde_json::json!({ "email": email, "password": "longpass1" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("No refresh cookie set")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(cookie.starts_with("refreshToken="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));

    let refresh_token = cookie
        .trim_start_matches("refreshToken=")
        .split(';')
        .next()
        .unwrap();
    let claims = app.session_issuer.validate_token(refresh_token).unwrap();
    assert_eq!(claims.sub, id);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["id"], id.as_str());
}

#[tokio::test]
async fn refresh_token_rejects_wrong_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.create_user("Ana", &email, "longpass1").await;

    let response = app
        .post_refresh_token(&serde_json::json!({ "email": email, "password": "longpass2" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn full_account_scenario() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let registration = serde_json::json!({
        "name": "Ana",
        "email": email,
        "password": "longpass1",
    });

    assert_eq!(app.post_users(&registration).await.status().as_u16(), 201);
    assert_eq!(app.post_users(&registration).await.status().as_u16(), 409);

    let login = serde_json::json!({ "email": email, "password": "longpass1" });
    assert_eq!(app.post_session(&login).await.status().as_u16(), 200);

    let bad_login = serde_json::json!({ "email": email, "password": "wrong" });
    assert_eq!(app.post_session(&bad_login).await.status().as_u16(), 400);

    let refreshed = app.post_refresh_token(&login).await;
    assert_eq!(refreshed.status().as_u16(), 200);
    assert!(refreshed.headers().get(SET_COOKIE).is_some());
}
