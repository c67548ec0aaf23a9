use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::services::availability::AvailabilityService;
use crate::infra::http::auth_api::HttpAuthApi;
use crate::infra::http::client::HttpClient;
use crate::infra::http::occupancy_api::HttpOccupancyApi;
use crate::infra::http::payments_api::HttpPaymentsApi;
use crate::infra::http::reservations_api::HttpReservationsApi;
use crate::infra::http::staff_api::HttpStaffApi;
use crate::infra::http::tickets_api::HttpTicketsApi;
use crate::session::SessionStore;
use crate::state::AppState;

/// Wire the HTTP adapters against the configured backend. All adapters share
/// one transport, and through it one session store.
pub fn bootstrap_state(config: &Config) -> AppState {
    info!("connecting to backend at {}", config.api_base_url);

    let session = SessionStore::new();
    let http = HttpClient::new(config.api_base_url.clone(), session.clone());

    let availability = AvailabilityService::new(
        config.clone(),
        Arc::new(HttpOccupancyApi::new(http.clone())),
    );

    AppState {
        config: config.clone(),
        session,
        auth_api: Arc::new(HttpAuthApi::new(http.clone())),
        reservations_api: Arc::new(HttpReservationsApi::new(http.clone())),
        tickets_api: Arc::new(HttpTicketsApi::new(http.clone())),
        payments_api: Arc::new(HttpPaymentsApi::new(http.clone())),
        staff_api: Arc::new(HttpStaffApi::new(http)),
        availability,
    }
}
