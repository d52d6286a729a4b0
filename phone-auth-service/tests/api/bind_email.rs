use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{ANON_KEY, SERVICE_KEY, TestApp, error_body, fake_password, fake_phone};

async fn mount_identity_lookup(backend: &MockServer, access_token: &str, user_id: &str) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("apikey", ANON_KEY))
        .and(header("Authorization", format!("Bearer {access_token}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": user_id})))
        .mount(backend)
        .await;
}

#[tokio::test]
async fn test_missing_auth_header_is_rejected_before_body_parsing() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    // No header at all, and a non-Bearer scheme; neither may reach the
    // backend, even with a perfectly valid body.
    for authorization in [None, Some("Token abc")] {
        let response = app
            .post_bind(authorization, r#"{"password": "Secret123"}"#)
            .await;
        assert_eq!(response.status(), 401);
        assert_eq!(
            error_body(response).await,
            "Missing or invalid Authorization header"
        );
    }
}

#[tokio::test]
async fn test_malformed_body_falls_through_to_missing_password() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let response = app.post_bind(Some("Bearer valid-token"), "not-json").await;
    assert_eq!(response.status(), 400);
    assert_eq!(error_body(response).await, "password is required");
}

#[tokio::test]
async fn test_empty_password_is_rejected() {
    let app = TestApp::spawn().await;

    for body in [r#"{}"#, r#"{"password": ""}"#] {
        let response = app.post_bind(Some("Bearer valid-token"), body).await;
        assert_eq!(response.status(), 400);
        assert_eq!(error_body(response).await, "password is required");
    }
}

#[tokio::test]
async fn test_unresolvable_session_is_a_401() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "msg": "JWT expired",
        })))
        .mount(&app.backend)
        .await;

    let response = app
        .post_bind(Some("Bearer expired-token"), r#"{"password": "Secret123"}"#)
        .await;
    assert_eq!(response.status(), 401);
    assert_eq!(error_body(response).await, "Invalid or expired session");
}

#[tokio::test]
async fn test_binding_overwrites_credentials_for_the_resolved_user() {
    let app = TestApp::spawn().await;
    let user_id = "4d3f9b1c-2a2e-4c11-bb1d-9d5a4a0f61aa";
    mount_identity_lookup(&app.backend, "caller-token", user_id).await;

    Mock::given(method("PUT"))
        .and(path(format!("/auth/v1/admin/users/{user_id}")))
        .and(header("apikey", SERVICE_KEY))
        .and(header("Authorization", format!("Bearer {SERVICE_KEY}")))
        .and(body_json(serde_json::json!({
            "email": format!("{user_id}@phone.gabay"),
            "password": "Secret123",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": user_id})))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app
        .post_bind(Some("Bearer caller-token"), r#"{"password": "Secret123"}"#)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        serde_json::json!({"ok": true})
    );
}

#[tokio::test]
async fn test_update_rejection_message_is_propagated() {
    let app = TestApp::spawn().await;
    mount_identity_lookup(&app.backend, "caller-token", "user-1").await;

    Mock::given(method("PUT"))
        .and(path("/auth/v1/admin/users/user-1"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "msg": "A user with this email address has already been registered",
        })))
        .mount(&app.backend)
        .await;

    let response = app
        .post_bind(Some("Bearer caller-token"), r#"{"password": "Secret123"}"#)
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        error_body(response).await,
        "A user with this email address has already been registered"
    );
}

#[tokio::test]
async fn test_non_post_methods_are_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .http_client
        .get(format!("{}/set-auth-email-password", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 405);
    assert_eq!(error_body(response).await, "Method not allowed");
}

#[tokio::test]
async fn test_bound_credentials_enable_phone_login() {
    // The registration flow end to end: bind a password for the
    // phone-verified caller, then log in with phone + that password.
    let app = TestApp::spawn().await;
    let user_id = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
    let phone = fake_phone();
    let password = fake_password();

    mount_identity_lookup(&app.backend, "otp-session-token", user_id).await;
    Mock::given(method("PUT"))
        .and(path(format!("/auth/v1/admin/users/{user_id}")))
        .and(body_json(serde_json::json!({
            "email": format!("{user_id}@phone.gabay"),
            "password": password,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": user_id})))
        .mount(&app.backend)
        .await;

    let bind_body = format!(r#"{{"password": "{password}"}}"#);
    let bind_response = app
        .post_bind(Some("Bearer otp-session-token"), &bind_body)
        .await;
    assert_eq!(bind_response.status(), 200);

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/login_by_phone"))
        .and(body_json(serde_json::json!({
            "p_phone": phone,
            "p_password": password,
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": user_id}])),
        )
        .mount(&app.backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(body_json(serde_json::json!({
            "grant_type": "password",
            "email": format!("{user_id}@phone.gabay"),
            "password": password,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "fresh-access-token",
            "refresh_token": "fresh-refresh-token",
            "token_type": "bearer",
        })))
        .mount(&app.backend)
        .await;

    let login_response = app
        .post_login(&serde_json::json!({"phone": phone, "password": password}))
        .await;
    assert_eq!(login_response.status(), 200);
    let session = login_response.json::<serde_json::Value>().await.unwrap();
    assert!(!session["access_token"].as_str().unwrap().is_empty());
    assert!(!session["refresh_token"].as_str().unwrap().is_empty());
}
