use balneario_client::config::{AvailabilityFallback, Config};
use balneario_client::infra::factory::bootstrap_state;
use balneario_client::state::AppState;
use base64::{engine::general_purpose, Engine as _};
use wiremock::MockServer;

pub struct TestApp {
    pub server: MockServer,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_fallback(AvailabilityFallback::Optimistic).await
    }

    pub async fn with_fallback(fallback: AvailabilityFallback) -> Self {
        let server = MockServer::start().await;
        let config = Config {
            api_base_url: server.uri(),
            day_ticket_price: 5000,
            night_ticket_price: 10000,
            private_weekday_price: 20000,
            private_weekend_price: 25000,
            kitchen_service_price: 25000,
            room_service_price: 50000,
            minimum_occupancy_surcharge: 100000,
            venue_capacity: 120,
            private_min_weekday: 10,
            private_min_weekend: 15,
            min_advance_days: 1,
            max_advance_days: 90,
            max_range_days: 30,
            availability_fallback: fallback,
        };
        let state = bootstrap_state(&config);
        Self { server, state }
    }

    /// A JWT-shaped token whose payload decodes to a user with the given role.
    pub fn token_for(id: &str, name: &str, role: &str) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(
            serde_json::json!({"id": id, "nombre": name, "email": format!("{id}@example.com"), "rol": role})
                .to_string()
                .as_bytes(),
        );
        format!("{header}.{payload}.firma")
    }

    /// Install a session directly, as if a stored token had been rehydrated.
    pub fn sign_in(&self, id: &str, name: &str, role: &str) -> String {
        let token = Self::token_for(id, name, role);
        assert!(self.state.session.restore(&token));
        token
    }
}
