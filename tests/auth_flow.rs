use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use breadbutter_core::config::Config;
use breadbutter_core::error::Error;
use breadbutter_core::App;

fn user_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": "ava@example.com",
        "role": "authenticated"
    })
}

fn session_json(id: &str) -> serde_json::Value {
    json!({
        "access_token": "test-access-token",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "test-refresh-token",
        "user": user_json(id)
    })
}

const USER_ID: &str = "9e1a9c52-2f5f-41c8-93e2-92e7a9a2f0cd";

#[tokio::test]
async fn sign_up_passes_the_confirmation_redirect() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(query_param("redirect_to", "https://breadbutter.example/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json(USER_ID)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config =
        Config::new(server.uri(), "test-anon-key").with_site_url("https://breadbutter.example");
    let app = App::new(config).unwrap();

    let response = app
        .auth()
        .sign_up("ava@example.com", "password123")
        .await
        .unwrap();

    // Confirmation pending: an account but no tokens, so no session either.
    assert!(response.requires_confirmation());
    assert!(app.auth().session().is_none());
}

#[tokio::test]
async fn sign_in_stores_the_session_and_resolves_the_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json(USER_ID)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(USER_ID)))
        .mount(&server)
        .await;

    let app = App::new(Config::new(server.uri(), "test-anon-key")).unwrap();

    let response = app
        .auth()
        .sign_in("ava@example.com", "password123")
        .await
        .unwrap();
    assert!(!response.requires_confirmation());
    assert!(app.auth().session().is_some());

    let user = app.auth().current_user().await.unwrap().unwrap();
    assert_eq!(user.id.to_string(), USER_ID);
}

#[tokio::test]
async fn sign_out_clears_the_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json(USER_ID)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let app = App::new(Config::new(server.uri(), "test-anon-key")).unwrap();

    app.auth()
        .sign_in("ava@example.com", "password123")
        .await
        .unwrap();
    app.auth().sign_out().await.unwrap();

    assert!(app.auth().session().is_none());
    assert!(app.auth().current_user().await.unwrap().is_none());

    // Signing out again without a session is fine.
    app.auth().sign_out().await.unwrap();
}

#[tokio::test]
async fn an_expired_token_reads_as_signed_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json(USER_ID)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "msg": "JWT expired"
        })))
        .mount(&server)
        .await;

    let app = App::new(Config::new(server.uri(), "test-anon-key")).unwrap();

    app.auth()
        .sign_in("ava@example.com", "password123")
        .await
        .unwrap();

    assert!(app.auth().current_user().await.unwrap().is_none());
    assert!(app.auth().session().is_none());
}

#[tokio::test]
async fn provider_error_messages_pass_through_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let app = App::new(Config::new(server.uri(), "test-anon-key")).unwrap();

    let err = app
        .auth()
        .sign_in("ava@example.com", "wrong")
        .await
        .unwrap_err();

    match err {
        Error::Auth(message) => assert_eq!(message, "Invalid login credentials"),
        other => panic!("expected an auth error, got {:?}", other),
    }
}
