mod common;

use std::time::Duration as StdDuration;

use balneario_client::config::AvailabilityFallback;
use balneario_client::domain::models::reservation::{ReservationKind, Schedule};
use balneario_client::domain::services::availability::AvailabilityQuery;
use balneario_client::error::AppError;
use chrono::{Duration, NaiveDate, Utc};
use common::TestApp;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn query_for(date: NaiveDate) -> AvailabilityQuery {
    AvailabilityQuery {
        date,
        schedule: Schedule::Day,
        kind: ReservationKind::General,
    }
}

#[tokio::test]
async fn optimistic_fallback_assumes_a_vacant_venue() {
    let app = TestApp::new().await;
    app.sign_in("u1", "Ana", "cliente");

    Mock::given(method("GET"))
        .and(path("/api/ocupacion"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.server)
        .await;

    let date = Utc::now().date_naive() + Duration::days(5);
    let snapshot = app
        .state
        .availability
        .snapshot_for(query_for(date))
        .await
        .unwrap();
    assert!(snapshot.available);
    assert_eq!(snapshot.occupancy, 0);
    assert!(!snapshot.blocked_by_private);
}

#[tokio::test]
async fn strict_fallback_propagates_the_failure() {
    let app = TestApp::with_fallback(AvailabilityFallback::Strict).await;
    app.sign_in("u1", "Ana", "cliente");

    Mock::given(method("GET"))
        .and(path("/api/ocupacion"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "caído"})))
        .mount(&app.server)
        .await;

    let date = Utc::now().date_naive() + Duration::days(5);
    let err = app
        .state
        .availability
        .snapshot_for(query_for(date))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Api { status: 500, .. }));
}

#[tokio::test]
async fn session_expiry_is_never_papered_over_by_the_fallback() {
    let app = TestApp::new().await;
    app.sign_in("u1", "Ana", "cliente");

    Mock::given(method("GET"))
        .and(path("/api/ocupacion"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.server)
        .await;

    let date = Utc::now().date_naive() + Duration::days(5);
    let err = app
        .state
        .availability
        .snapshot_for(query_for(date))
        .await
        .unwrap_err();
    assert!(err.is_session_expired());
    assert!(!app.state.session.is_authenticated());
}

#[tokio::test]
async fn superseded_checks_come_back_stale() {
    let app = TestApp::new().await;
    app.sign_in("u1", "Ana", "cliente");

    let slow_date = Utc::now().date_naive() + Duration::days(5);
    let fast_date = Utc::now().date_naive() + Duration::days(6);

    Mock::given(method("GET"))
        .and(path("/api/ocupacion"))
        .and(query_param("fecha", slow_date.format("%Y-%m-%d").to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"disponible": true, "ocupacion": 80, "bloqueadoPorPrivada": false}))
                .set_delay(StdDuration::from_millis(400)),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/ocupacion"))
        .and(query_param("fecha", fast_date.format("%Y-%m-%d").to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"disponible": true, "ocupacion": 20, "bloqueadoPorPrivada": false}),
        ))
        .mount(&app.server)
        .await;

    let availability = app.state.availability.clone();
    let slow = availability.check(query_for(slow_date));
    let fast = async {
        tokio::time::sleep(StdDuration::from_millis(100)).await;
        availability.check(query_for(fast_date)).await
    };
    let (slow_result, fast_result) = tokio::join!(slow, fast);

    // The older in-flight check resolved after a newer one began: discarded.
    assert!(slow_result.unwrap().is_none());
    let report = fast_result.unwrap().expect("latest check must win");
    assert_eq!(report.snapshot.occupancy, 20);
    assert_eq!(report.remaining, 100);
}

#[tokio::test]
async fn a_fresh_check_reports_remaining_capacity() {
    let app = TestApp::new().await;
    app.sign_in("u1", "Ana", "cliente");

    Mock::given(method("GET"))
        .and(path("/api/ocupacion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"disponible": true, "ocupacion": 45, "bloqueadoPorPrivada": false}),
        ))
        .mount(&app.server)
        .await;

    let date = Utc::now().date_naive() + Duration::days(5);
    let report = app
        .state
        .availability
        .check(query_for(date))
        .await
        .unwrap()
        .expect("sole check is never stale");
    assert_eq!(report.remaining, 75);
    assert!(app
        .state
        .availability
        .decide(report.snapshot, ReservationKind::General, 75)
        .is_granted());
    assert!(!app
        .state
        .availability
        .decide(report.snapshot, ReservationKind::General, 76)
        .is_granted());
}
