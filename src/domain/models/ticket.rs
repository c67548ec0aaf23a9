use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::reservation::{DayPeriod, ReservationState, Schedule};
use crate::domain::models::user::UserProfile;
use crate::domain::services::pricing::PriceBreakdown;

/// On-site customer identity captured by staff for a walk-in sale.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WalkInCustomer {
    pub name: String,
    pub document: String,
    pub phone: Option<String>,
}

/// General-entry ticket. Single-day by construction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ticket {
    pub id: String,
    pub date: NaiveDate,
    pub schedule: Schedule,
    pub day_period: Option<DayPeriod>,
    pub headcount: u32,
    pub total_price: i64,
    pub state: ReservationState,
    pub walk_in: Option<WalkInCustomer>,
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub date: NaiveDate,
    pub schedule: Schedule,
    pub day_period: Option<DayPeriod>,
    pub headcount: u32,
    pub walk_in: Option<WalkInCustomer>,
}

impl NewTicket {
    /// Walk-ins are confirmed on the spot; everything else awaits payment.
    pub fn initial_state(&self) -> ReservationState {
        if self.walk_in.is_some() {
            ReservationState::Confirmed
        } else {
            ReservationState::Pending
        }
    }
}

#[derive(Debug, Clone)]
pub struct TicketSubmission {
    pub draft: NewTicket,
    pub breakdown: PriceBreakdown,
    pub state: ReservationState,
    pub owner: Option<UserProfile>,
}
