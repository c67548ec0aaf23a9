use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::occupancy::OccupancySnapshot;
use crate::domain::models::payment::{Payment, PaymentMethod};
use crate::domain::models::reservation::{
    Reservation, ReservationChanges, ReservationKind, ReservationState, ReservationSubmission,
    Schedule,
};
use crate::domain::models::service::ServiceId;
use crate::domain::models::shift::StaffShift;
use crate::domain::models::ticket::{Ticket, TicketSubmission};
use crate::domain::models::user::{Credentials, Registration, UserProfile};
use crate::error::AppError;

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<String, AppError>;
    async fn register(&self, registration: &Registration) -> Result<(), AppError>;
    async fn forgot_password(&self, email: &str) -> Result<(), AppError>;
    async fn reset_password(&self, token: &str, password: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ReservationsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Reservation>, AppError>;
    async fn create(&self, submission: &ReservationSubmission) -> Result<Reservation, AppError>;
    async fn update(&self, id: &str, changes: &ReservationChanges) -> Result<Reservation, AppError>;
    async fn set_state(&self, id: &str, state: ReservationState) -> Result<Reservation, AppError>;
    async fn set_headcount(&self, id: &str, headcount: u32) -> Result<Reservation, AppError>;
    async fn set_services(
        &self,
        id: &str,
        services: &BTreeSet<ServiceId>,
    ) -> Result<Reservation, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait TicketsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Ticket>, AppError>;
    async fn create(&self, submission: &TicketSubmission) -> Result<Ticket, AppError>;
}

#[async_trait]
pub trait OccupancyApi: Send + Sync {
    async fn occupancy(
        &self,
        date: NaiveDate,
        schedule: Schedule,
        kind: ReservationKind,
    ) -> Result<OccupancySnapshot, AppError>;
}

#[async_trait]
pub trait PaymentsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Payment>, AppError>;
    async fn register(
        &self,
        reservation_id: &str,
        method: PaymentMethod,
    ) -> Result<Payment, AppError>;
}

#[async_trait]
pub trait StaffApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserProfile>, AppError>;
    async fn create_shifts(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<StaffShift>, AppError>;
}
