use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::domain::models::payment::{Payment, PaymentMethod};
use crate::domain::models::reservation::{Reservation, ReservationState};
use crate::domain::ports::PaymentsApi;
use crate::error::AppError;

pub struct PaymentService {
    api: Arc<dyn PaymentsApi>,
}

impl PaymentService {
    pub fn new(api: Arc<dyn PaymentsApi>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Payment>, AppError> {
        self.api.list().await
    }

    /// Registering a payment is the client's request for pending → confirmed.
    /// Whether the reservation actually confirms is the backend's call.
    pub async fn register(
        &self,
        reservation: &Reservation,
        method: PaymentMethod,
    ) -> Result<Payment, AppError> {
        if !reservation.state.can_request(ReservationState::Confirmed) {
            return Err(AppError::Validation(format!(
                "A payment cannot be registered for a {} reservation",
                reservation.state.as_str()
            )));
        }
        info!("registering {} payment for reservation {}", method.as_str(), reservation.id);
        self.api.register(&reservation.id, method).await
    }

    /// Reservation ids that have at least one registered payment.
    pub fn paid_reservation_ids(payments: &[Payment]) -> HashSet<&str> {
        payments.iter().map(|p| p.reservation_id.as_str()).collect()
    }
}
