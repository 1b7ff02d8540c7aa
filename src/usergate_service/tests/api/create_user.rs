use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_201_with_the_new_id() {
    let app = TestApp::new().await;

    let response = app
        .post_users(&serde_json::json!({
            "name": "Ana",
            "email": get_random_email(),
            "password": "longpass1",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.create_user("Ana", &email, "longpass1").await;

    let response = app
        .post_users(&serde_json::json!({
            "name": "Ana Again",
            "email": email,
            "password": "anotherpass",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "User already exists with this e-mail");
}

#[tokio::test]
async fn should_return_400_with_field_for_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        (
            serde_json::json!({ "name": "Ana", "email": "ana.example.com", "password": "longpass1" }),
            "email",
        ),
        (
            serde_json::json!({ "name": "Ana", "email": get_random_email(), "password": "short" }),
            "password",
        ),
        (
            serde_json::json!({ "name": "   ", "email": get_random_email(), "password": "longpass1" }),
            "name",
        ),
        (
            serde_json::json!({ "name": "Ana", "email": "", "password": "longpass1" }),
            "email",
        ),
    ];

    for (body, field) in test_cases.iter() {
        let response = app.post_users(body).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            body
        );

        let error: serde_json::Value = response.json().await.unwrap();
        assert_eq!(error["field"], *field, "Failed for input: {:?}", body);
    }
}

#[tokio::test]
async fn should_return_400_if_malformed_input() {
    let app = TestApp::new().await;

    let test_cases = [
        serde_json::json!({ "email": get_random_email(), "password": "longpass1" }),
        serde_json::json!({ "name": "Ana", "password": "longpass1" }),
        serde_json::json!({ "name": 42, "email": get_random_email(), "password": "longpass1" }),
    ];

    for body in test_cases.iter() {
        let response = app.post_users(body).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            body
        );
    }
}

#[tokio::test]
async fn health_check_returns_200() {
    let app = TestApp::new().await;

    let response = app.get_health().await;

    assert_eq!(response.status().as_u16(), 200);
}
