use std::env;

/// What to do when the occupancy query fails: assume an empty venue and keep
/// selling (the historical behavior), or refuse until the backend answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvailabilityFallback {
    Optimistic,
    Strict,
}

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub day_ticket_price: i64,
    pub night_ticket_price: i64,
    pub private_weekday_price: i64,
    pub private_weekend_price: i64,
    pub kitchen_service_price: i64,
    pub room_service_price: i64,
    pub minimum_occupancy_surcharge: i64,
    pub venue_capacity: u32,
    pub private_min_weekday: u32,
    pub private_min_weekend: u32,
    pub min_advance_days: i64,
    pub max_advance_days: i64,
    pub max_range_days: i64,
    pub availability_fallback: AvailabilityFallback,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("BALNEARIO_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            day_ticket_price: env_amount("PRECIO_ENTRADA_DIURNA", 5000),
            night_ticket_price: env_amount("PRECIO_ENTRADA_NOCTURNA", 10000),
            private_weekday_price: env_amount("PRECIO_RESERVA_SEMANA", 20000),
            private_weekend_price: env_amount("PRECIO_RESERVA_FINDE", 25000),
            kitchen_service_price: env_amount("PRECIO_SERVICIO_COCINA", 25000),
            room_service_price: env_amount("PRECIO_SERVICIO_CUARTO", 50000),
            minimum_occupancy_surcharge: env_amount("CARGO_MINIMO_PERSONAS", 100000),
            venue_capacity: env::var("AFORO_MAXIMO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
            private_min_weekday: 10,
            private_min_weekend: 15,
            min_advance_days: 1,
            max_advance_days: 90,
            max_range_days: 30,
            availability_fallback: match env::var("AVAILABILITY_FALLBACK").as_deref() {
                Ok("strict") => AvailabilityFallback::Strict,
                _ => AvailabilityFallback::Optimistic,
            },
        }
    }
}

fn env_amount(name: &str, default: i64) -> i64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        api_base_url: "http://localhost:3000".to_string(),
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
        availability_fallback: AvailabilityFallback::Optimistic,
    }
}
