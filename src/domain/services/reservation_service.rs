use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::config::Config;
use crate::domain::models::reservation::{
    NewReservation, Reservation, ReservationChanges, ReservationKind, ReservationState,
    ReservationSubmission,
};
use crate::domain::models::service::ServiceId;
use crate::domain::ports::ReservationsApi;
use crate::domain::services::availability::{AvailabilityQuery, AvailabilityService};
use crate::domain::services::{calendar, pricing, validation};
use crate::error::AppError;
use crate::session::SessionStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub completed: usize,
    pub upcoming: Vec<Reservation>,
}

pub struct ReservationService {
    config: Config,
    api: Arc<dyn ReservationsApi>,
    availability: AvailabilityService,
    session: SessionStore,
}

impl ReservationService {
    pub fn new(
        config: Config,
        api: Arc<dyn ReservationsApi>,
        availability: AvailabilityService,
        session: SessionStore,
    ) -> Self {
        Self {
            config,
            api,
            availability,
            session,
        }
    }

    pub async fn list(&self) -> Result<Vec<Reservation>, AppError> {
        self.api.list().await
    }

    /// Validate, price, gate on availability (general entry only) and submit.
    /// The backend's echo is the authoritative record.
    pub async fn create(&self, draft: NewReservation) -> Result<Reservation, AppError> {
        let today = Utc::now().date_naive();
        calendar::validate_range(&self.config, draft.date_start, draft.date_end, today)?;
        validation::validate_observations(draft.observations.as_deref())?;
        validation::validate_headcount(&self.config, draft.kind, draft.date_start, draft.headcount)?;

        let breakdown = pricing::quote(
            &self.config,
            &pricing::PricingRequest {
                kind: draft.kind,
                schedule: draft.schedule,
                date_start: draft.date_start,
                date_end: draft.date_end,
                headcount: draft.headcount,
                services: draft.services.clone(),
            },
        )?;

        if draft.kind == ReservationKind::General {
            self.availability
                .ensure_capacity(
                    AvailabilityQuery {
                        date: draft.date_start,
                        schedule: draft.schedule,
                        kind: draft.kind,
                    },
                    draft.headcount,
                )
                .await?;
        }

        let submission = ReservationSubmission {
            draft,
            breakdown,
            state: ReservationState::Pending,
            owner: self.session.user(),
        };
        let created = self.api.create(&submission).await?;
        info!(
            "reservation {} created, total {}",
            created.id, created.total_price
        );
        Ok(created)
    }

    pub async fn update(
        &self,
        reservation: &Reservation,
        changes: ReservationChanges,
    ) -> Result<Reservation, AppError> {
        let today = Utc::now().date_naive();
        if !reservation.can_modify(today) {
            return Err(AppError::Validation(
                "This reservation can no longer be modified".into(),
            ));
        }
        self.api.update(&reservation.id, &changes).await
    }

    /// Headcount changes re-run the capacity bounds but keep the server as
    /// the pricing authority.
    pub async fn update_headcount(
        &self,
        reservation: &Reservation,
        headcount: u32,
    ) -> Result<Reservation, AppError> {
        let today = Utc::now().date_naive();
        if !reservation.can_modify(today) {
            return Err(AppError::Validation(
                "This reservation can no longer be modified".into(),
            ));
        }
        validation::validate_headcount(
            &self.config,
            reservation.kind,
            reservation.date_start,
            headcount,
        )?;
        self.api.set_headcount(&reservation.id, headcount).await
    }

    pub async fn update_services(
        &self,
        reservation: &Reservation,
        services: BTreeSet<ServiceId>,
    ) -> Result<Reservation, AppError> {
        let today = Utc::now().date_naive();
        if !reservation.can_modify(today) {
            return Err(AppError::Validation(
                "This reservation can no longer be modified".into(),
            ));
        }
        self.api.set_services(&reservation.id, &services).await
    }

    /// Ask the backend to move the reservation to cancellation_pending. The
    /// returned state, whatever it is, wins.
    pub async fn request_cancellation(
        &self,
        reservation: &Reservation,
    ) -> Result<Reservation, AppError> {
        if !reservation.can_cancel() {
            return Err(AppError::Validation(
                "This reservation cannot be cancelled".into(),
            ));
        }
        info!("requesting cancellation of reservation {}", reservation.id);
        self.api
            .set_state(&reservation.id, ReservationState::CancellationPending)
            .await
    }

    /// Hard removal, distinct from the cancellation workflow.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        info!("deleting reservation {id}");
        self.api.delete(id).await
    }

    /// Client-side aggregation for the dashboard.
    pub fn stats(&self, reservations: &[Reservation], today: NaiveDate) -> ReservationStats {
        let mut upcoming: Vec<Reservation> = reservations
            .iter()
            .filter(|r| r.state == ReservationState::Confirmed && r.date_start > today)
            .cloned()
            .collect();
        upcoming.sort_by_key(|r| r.date_start);
        upcoming.truncate(5);

        ReservationStats {
            total: reservations.len(),
            pending: count(reservations, ReservationState::Pending),
            confirmed: count(reservations, ReservationState::Confirmed),
            cancelled: count(reservations, ReservationState::Cancelled),
            completed: count(reservations, ReservationState::Completed),
            upcoming,
        }
    }
}

fn count(reservations: &[Reservation], state: ReservationState) -> usize {
    reservations.iter().filter(|r| r.state == state).count()
}
