mod common;

use balneario_client::error::AppError;
use common::TestApp;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn bearer_header_is_injected_from_the_session() {
    let app = TestApp::new().await;
    let token = app.sign_in("u1", "Ana", "cliente");

    Mock::given(method("GET"))
        .and(path("/api/reservas"))
        .and(header("authorization", format!("Bearer {token}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    let reservations = app.state.reservations().list().await.unwrap();
    assert!(reservations.is_empty());
}

#[tokio::test]
async fn a_401_clears_the_session_and_is_not_retried() {
    let app = TestApp::new().await;
    app.sign_in("u1", "Ana", "cliente");

    Mock::given(method("GET"))
        .and(path("/api/reservas"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&app.server)
        .await;

    let err = app.state.reservations().list().await.unwrap_err();
    assert!(matches!(err, AppError::SessionExpired));
    assert!(!app.state.session.is_authenticated());
    assert_eq!(app.state.session.token(), None);
}

#[tokio::test]
async fn authenticated_calls_keep_failing_until_relogin() {
    let app = TestApp::new().await;
    app.sign_in("u1", "Ana", "cliente");

    // The backend rejects everything until the token is renewed.
    let rejecting = Mock::given(method("GET"))
        .and(path("/api/reservas"))
        .respond_with(ResponseTemplate::new(401))
        .mount_as_scoped(&app.server)
        .await;

    assert!(matches!(
        app.state.reservations().list().await.unwrap_err(),
        AppError::SessionExpired
    ));
    // Still expired: the cleared session sends no bearer and keeps failing.
    assert!(matches!(
        app.state.reservations().list().await.unwrap_err(),
        AppError::SessionExpired
    ));
    drop(rejecting);

    // Re-login restores service.
    let fresh = TestApp::token_for("u1", "Ana", "cliente");
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": fresh})))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reservas"))
        .and(header("authorization", format!("Bearer {fresh}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&app.server)
        .await;

    app.state
        .auth()
        .login(balneario_client::domain::models::user::Credentials {
            email: "ana@example.com".into(),
            password: "abc12345".into(),
        })
        .await
        .unwrap();
    assert!(app.state.reservations().list().await.is_ok());
}

#[tokio::test]
async fn session_expiry_from_any_endpoint_affects_all_consumers() {
    let app = TestApp::new().await;
    app.sign_in("staff", "Turnos", "personal");

    Mock::given(method("GET"))
        .and(path("/api/pagos"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.server)
        .await;

    let err = app.state.payments().list().await.unwrap_err();
    assert!(err.is_session_expired());
    // The shared store is cleared for everyone, not just the payments path.
    assert!(!app.state.session.is_staff());
    assert!(app.state.session.user().is_none());
}
