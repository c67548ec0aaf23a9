use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{AuthApi, PaymentsApi, ReservationsApi, StaffApi, TicketsApi};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::availability::AvailabilityService;
use crate::domain::services::payment_service::PaymentService;
use crate::domain::services::reservation_service::ReservationService;
use crate::domain::services::shift_service::ShiftService;
use crate::domain::services::ticket_service::TicketService;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub auth_api: Arc<dyn AuthApi>,
    pub reservations_api: Arc<dyn ReservationsApi>,
    pub tickets_api: Arc<dyn TicketsApi>,
    pub payments_api: Arc<dyn PaymentsApi>,
    pub staff_api: Arc<dyn StaffApi>,
    pub availability: AvailabilityService,
}

impl AppState {
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.auth_api.clone(), self.session.clone())
    }

    pub fn reservations(&self) -> ReservationService {
        ReservationService::new(
            self.config.clone(),
            self.reservations_api.clone(),
            self.availability.clone(),
            self.session.clone(),
        )
    }

    pub fn tickets(&self) -> TicketService {
        TicketService::new(
            self.config.clone(),
            self.tickets_api.clone(),
            self.availability.clone(),
            self.session.clone(),
        )
    }

    pub fn payments(&self) -> PaymentService {
        PaymentService::new(self.payments_api.clone())
    }

    pub fn shifts(&self) -> ShiftService {
        ShiftService::new(self.staff_api.clone(), self.session.clone())
    }
}
