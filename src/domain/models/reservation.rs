use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::service::ServiceId;
use crate::domain::models::user::UserProfile;
use crate::domain::services::pricing::PriceBreakdown;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationKind {
    #[serde(rename = "general")]
    General,
    #[serde(rename = "privada")]
    Private,
}

impl ReservationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationKind::General => "general",
            ReservationKind::Private => "privada",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schedule {
    #[serde(rename = "diurno")]
    Day,
    #[serde(rename = "nocturno")]
    Night,
}

impl Schedule {
    pub fn as_str(self) -> &'static str {
        match self {
            Schedule::Day => "diurno",
            Schedule::Night => "nocturno",
        }
    }
}

/// Sub-period of the day schedule. The night schedule has no sub-periods.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    #[serde(rename = "completa")]
    Full,
    #[serde(rename = "manana")]
    Morning,
    #[serde(rename = "tarde")]
    Afternoon,
}

impl DayPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            DayPeriod::Full => "completa",
            DayPeriod::Morning => "manana",
            DayPeriod::Afternoon => "tarde",
        }
    }
}

/// Access window submitted to the backend, in venue-local wall-clock time.
pub fn access_window(schedule: Schedule, period: Option<DayPeriod>) -> (&'static str, &'static str) {
    match (schedule, period) {
        (Schedule::Night, _) => ("18:00", "23:00"),
        (Schedule::Day, Some(DayPeriod::Morning)) => ("09:00", "12:00"),
        (Schedule::Day, Some(DayPeriod::Afternoon)) => ("14:00", "18:00"),
        (Schedule::Day, _) => ("09:00", "18:00"),
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationState {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "cancelacion_pendiente")]
    CancellationPending,
    #[serde(rename = "cancelada")]
    Cancelled,
    #[serde(rename = "completada")]
    Completed,
}

impl ReservationState {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationState::Pending => "pendiente",
            ReservationState::Confirmed => "confirmada",
            ReservationState::CancellationPending => "cancelacion_pendiente",
            ReservationState::Cancelled => "cancelada",
            ReservationState::Completed => "completada",
        }
    }

    /// Every legal lifecycle transition, whether client-requested or applied
    /// by the backend on its own (cancellation confirmation, completion).
    pub fn can_transition(self, next: ReservationState) -> bool {
        use ReservationState::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, CancellationPending)
                | (Confirmed, CancellationPending)
                | (CancellationPending, Cancelled)
                | (Confirmed, Completed)
        )
    }

    /// Transitions the client may ask for. The backend's answer is the
    /// authoritative state; the client never assumes the request succeeded.
    pub fn can_request(self, next: ReservationState) -> bool {
        use ReservationState::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, CancellationPending) | (Confirmed, CancellationPending)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ReservationState::Cancelled | ReservationState::Completed)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: String,
    pub kind: ReservationKind,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub schedule: Schedule,
    pub day_period: Option<DayPeriod>,
    pub headcount: u32,
    pub services: BTreeSet<ServiceId>,
    pub base_price: i64,
    pub services_total: i64,
    pub minimum_occupancy_surcharge: i64,
    pub total_price: i64,
    pub state: ReservationState,
    pub observations: Option<String>,
    pub owner_id: Option<String>,
}

impl Reservation {
    pub fn days(&self) -> i64 {
        (self.date_end - self.date_start).num_days().max(0) + 1
    }

    /// Headcount and service changes are only allowed before the stay starts
    /// and while the reservation is still live.
    pub fn can_modify(&self, today: NaiveDate) -> bool {
        matches!(
            self.state,
            ReservationState::Pending | ReservationState::Confirmed
        ) && self.date_start >= today
    }

    pub fn can_cancel(&self) -> bool {
        self.state
            .can_request(ReservationState::CancellationPending)
    }
}

/// What the creation wizard collects before pricing.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub kind: ReservationKind,
    pub date_start: NaiveDate,
    pub date_end: Option<NaiveDate>,
    pub schedule: Schedule,
    pub day_period: Option<DayPeriod>,
    pub headcount: u32,
    pub services: BTreeSet<ServiceId>,
    pub observations: Option<String>,
}

/// A priced draft ready to go over the wire.
#[derive(Debug, Clone)]
pub struct ReservationSubmission {
    pub draft: NewReservation,
    pub breakdown: PriceBreakdown,
    pub state: ReservationState,
    pub owner: Option<UserProfile>,
}

/// Partial update for `PUT /api/reservas/:id`.
#[derive(Debug, Clone, Default)]
pub struct ReservationChanges {
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub schedule: Option<Schedule>,
    pub day_period: Option<DayPeriod>,
    pub headcount: Option<u32>,
    pub services: Option<BTreeSet<ServiceId>>,
    pub observations: Option<String>,
}
