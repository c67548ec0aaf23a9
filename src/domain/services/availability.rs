use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use crate::config::{AvailabilityFallback, Config};
use crate::domain::models::occupancy::OccupancySnapshot;
use crate::domain::models::reservation::{ReservationKind, Schedule};
use crate::domain::ports::OccupancyApi;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub schedule: Schedule,
    pub kind: ReservationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityDecision {
    Granted { remaining: u32 },
    /// A private reservation holds the slot: general entry is refused
    /// outright, regardless of how much capacity is nominally left.
    BlockedByPrivate,
    Unavailable,
    InsufficientCapacity { remaining: u32 },
}

impl AvailabilityDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AvailabilityDecision::Granted { .. })
    }

    pub fn into_result(self) -> Result<u32, AppError> {
        match self {
            AvailabilityDecision::Granted { remaining } => Ok(remaining),
            AvailabilityDecision::BlockedByPrivate => Err(AppError::Validation(
                "General entry is blocked: a private reservation holds this date and schedule"
                    .into(),
            )),
            AvailabilityDecision::Unavailable => Err(AppError::Validation(
                "The selected date and schedule are not available".into(),
            )),
            AvailabilityDecision::InsufficientCapacity { remaining } => Err(AppError::Validation(
                format!("Only {remaining} more people fit in this schedule"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityReport {
    pub query: AvailabilityQuery,
    pub snapshot: OccupancySnapshot,
    pub remaining: u32,
}

/// Pure decision over a snapshot. The private block is checked before
/// capacity so it can never be mistaken for ordinary exhaustion.
pub fn evaluate(
    config: &Config,
    snapshot: OccupancySnapshot,
    kind: ReservationKind,
    headcount: u32,
) -> AvailabilityDecision {
    let remaining = config.venue_capacity.saturating_sub(snapshot.occupancy);
    if snapshot.blocked_by_private && kind == ReservationKind::General {
        return AvailabilityDecision::BlockedByPrivate;
    }
    if !snapshot.available {
        return AvailabilityDecision::Unavailable;
    }
    if headcount > remaining {
        return AvailabilityDecision::InsufficientCapacity { remaining };
    }
    AvailabilityDecision::Granted { remaining }
}

/// Occupancy lookups with two policies attached: the configured degrade
/// behavior when the read fails, and last-writer-wins staleness tracking for
/// checks racing each other from rapid input changes.
#[derive(Clone)]
pub struct AvailabilityService {
    config: Config,
    occupancy_api: Arc<dyn OccupancyApi>,
    generation: Arc<AtomicU64>,
}

impl AvailabilityService {
    pub fn new(config: Config, occupancy_api: Arc<dyn OccupancyApi>) -> Self {
        Self {
            config,
            occupancy_api,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fetch the snapshot for a query, applying the configured fallback when
    /// the read fails. Session expiry always propagates: a forced logout must
    /// not be papered over with an optimistic answer.
    pub async fn snapshot_for(&self, query: AvailabilityQuery) -> Result<OccupancySnapshot, AppError> {
        match self
            .occupancy_api
            .occupancy(query.date, query.schedule, query.kind)
            .await
        {
            Ok(snapshot) => Ok(snapshot),
            Err(err) if err.is_session_expired() => Err(err),
            Err(err) => match self.config.availability_fallback {
                AvailabilityFallback::Optimistic => {
                    warn!("occupancy query failed ({err}), assuming full availability");
                    Ok(OccupancySnapshot::vacant())
                }
                AvailabilityFallback::Strict => Err(err),
            },
        }
    }

    /// Run a check that may be superseded by a newer one before it resolves.
    /// Returns `Ok(None)` when the result came back stale; the caller must
    /// drop it rather than display it.
    pub async fn check(
        &self,
        query: AvailabilityQuery,
    ) -> Result<Option<AvailabilityReport>, AppError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = self.snapshot_for(query).await?;
        if self.generation.load(Ordering::SeqCst) != ticket {
            warn!(
                "discarding stale availability result for {} {}",
                query.date,
                query.schedule.as_str()
            );
            return Ok(None);
        }
        let remaining = self.config.venue_capacity.saturating_sub(snapshot.occupancy);
        Ok(Some(AvailabilityReport {
            query,
            snapshot,
            remaining,
        }))
    }

    pub fn decide(
        &self,
        snapshot: OccupancySnapshot,
        kind: ReservationKind,
        headcount: u32,
    ) -> AvailabilityDecision {
        evaluate(&self.config, snapshot, kind, headcount)
    }

    /// Gate used by the creation flows: fetch, decide, and turn a refusal
    /// into a validation error.
    pub async fn ensure_capacity(
        &self,
        query: AvailabilityQuery,
        headcount: u32,
    ) -> Result<u32, AppError> {
        let snapshot = self.snapshot_for(query).await?;
        self.decide(snapshot, query.kind, headcount).into_result()
    }
}
