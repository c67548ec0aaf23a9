use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::models::reservation::{ReservationKind, Schedule};
use crate::domain::models::service::ServiceId;
use crate::domain::services::calendar;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct PricingRequest {
    pub kind: ReservationKind,
    pub schedule: Schedule,
    pub date_start: NaiveDate,
    pub date_end: Option<NaiveDate>,
    pub headcount: u32,
    pub services: BTreeSet<ServiceId>,
}

/// The priced components of a reservation. `total_price` is always derived
/// from the other three amounts, never carried independently.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceBreakdown {
    pub days: i64,
    pub unit_price: i64,
    pub base_price: i64,
    pub services_total: i64,
    pub minimum_occupancy_surcharge: i64,
    pub total_price: i64,
}

/// Per-person unit price for a kind/schedule on a given start date. Private
/// bookings price by the weekday/weekend class of the start date.
pub fn unit_price(config: &Config, kind: ReservationKind, schedule: Schedule, start: NaiveDate) -> i64 {
    match kind {
        ReservationKind::General => match schedule {
            Schedule::Day => config.day_ticket_price,
            Schedule::Night => config.night_ticket_price,
        },
        ReservationKind::Private => {
            if calendar::is_weekend(start) {
                config.private_weekend_price
            } else {
                config.private_weekday_price
            }
        }
    }
}

/// Minimum headcount a private booking must reach to avoid the flat
/// minimum-occupancy surcharge.
pub fn minimum_headcount(config: &Config, start: NaiveDate) -> u32 {
    if calendar::is_weekend(start) {
        config.private_min_weekend
    } else {
        config.private_min_weekday
    }
}

pub fn quote(config: &Config, request: &PricingRequest) -> Result<PriceBreakdown, AppError> {
    if request.headcount < 1 {
        return Err(AppError::Validation(
            "At least 1 person is required".into(),
        ));
    }
    if request.headcount > config.venue_capacity {
        return Err(AppError::Validation(format!(
            "Venue capacity is {} people",
            config.venue_capacity
        )));
    }
    if let Some(end) = request.date_end {
        if end < request.date_start {
            return Err(AppError::Validation(
                "End date cannot come before the start date".into(),
            ));
        }
    }

    let days = calendar::day_count(request.date_start, request.date_end);
    let unit = unit_price(config, request.kind, request.schedule, request.date_start);
    let base_price = i64::from(request.headcount) * unit * days;

    // Flat amount, deliberately not scaled by headcount or days.
    let minimum_occupancy_surcharge = match request.kind {
        ReservationKind::Private
            if request.headcount < minimum_headcount(config, request.date_start) =>
        {
            config.minimum_occupancy_surcharge
        }
        _ => 0,
    };

    let services_total: i64 = request
        .services
        .iter()
        .map(|service| service.day_rate(config) * days)
        .sum();

    Ok(PriceBreakdown {
        days,
        unit_price: unit,
        base_price,
        services_total,
        minimum_occupancy_surcharge,
        total_price: base_price + services_total + minimum_occupancy_surcharge,
    })
}
