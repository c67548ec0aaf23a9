use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::config::Config;
use crate::domain::models::reservation::ReservationKind;
use crate::domain::models::ticket::{NewTicket, Ticket, TicketSubmission};
use crate::domain::ports::TicketsApi;
use crate::domain::services::availability::{AvailabilityQuery, AvailabilityService};
use crate::domain::services::capability::{has_capability, Capability};
use crate::domain::services::{calendar, pricing, validation};
use crate::error::AppError;
use crate::session::SessionStore;

/// General-entry ticket sales, including staff-registered walk-ins.
pub struct TicketService {
    config: Config,
    api: Arc<dyn TicketsApi>,
    availability: AvailabilityService,
    session: SessionStore,
}

impl TicketService {
    pub fn new(
        config: Config,
        api: Arc<dyn TicketsApi>,
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

    pub async fn list(&self) -> Result<Vec<Ticket>, AppError> {
        self.api.list().await
    }

    pub async fn create(&self, draft: NewTicket) -> Result<Ticket, AppError> {
        let today = Utc::now().date_naive();
        calendar::validate_range(&self.config, draft.date, None, today)?;
        validation::validate_headcount(
            &self.config,
            ReservationKind::General,
            draft.date,
            draft.headcount,
        )?;

        if let Some(walk_in) = &draft.walk_in {
            let registrar = self
                .session
                .user()
                .ok_or(AppError::Unauthorized)?;
            if !has_capability(&registrar, Capability::RegisterWalkIn) {
                return Err(AppError::Unauthorized);
            }
            if walk_in.name.trim().is_empty() {
                return Err(AppError::Validation("Customer name is required".into()));
            }
            if walk_in.document.trim().is_empty() {
                return Err(AppError::Validation("Customer document is required".into()));
            }
        }

        // Hard stop on a private hold, then ordinary capacity.
        self.availability
            .ensure_capacity(
                AvailabilityQuery {
                    date: draft.date,
                    schedule: draft.schedule,
                    kind: ReservationKind::General,
                },
                draft.headcount,
            )
            .await?;

        let breakdown = pricing::quote(
            &self.config,
            &pricing::PricingRequest {
                kind: ReservationKind::General,
                schedule: draft.schedule,
                date_start: draft.date,
                date_end: None,
                headcount: draft.headcount,
                services: BTreeSet::new(),
            },
        )?;

        let state = draft.initial_state();
        let submission = TicketSubmission {
            draft,
            breakdown,
            state,
            owner: self.session.user(),
        };
        let created = self.api.create(&submission).await?;
        info!(
            "ticket {} created for {} people, total {}",
            created.id, created.headcount, created.total_price
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::occupancy::OccupancySnapshot;
    use crate::domain::models::reservation::Schedule;
    use crate::domain::models::ticket::WalkInCustomer;
    use crate::domain::ports::OccupancyApi;
    use async_trait::async_trait;
    use base64::{engine::general_purpose, Engine as _};
    use chrono::NaiveDate;

    struct FixedOccupancy(OccupancySnapshot);

    #[async_trait]
    impl OccupancyApi for FixedOccupancy {
        async fn occupancy(
            &self,
            _date: NaiveDate,
            _schedule: Schedule,
            _kind: ReservationKind,
        ) -> Result<OccupancySnapshot, AppError> {
            Ok(self.0)
        }
    }

    struct EchoTickets;

    #[async_trait]
    impl TicketsApi for EchoTickets {
        async fn list(&self) -> Result<Vec<Ticket>, AppError> {
            Ok(Vec::new())
        }
        async fn create(&self, submission: &TicketSubmission) -> Result<Ticket, AppError> {
            Ok(Ticket {
                id: "t1".into(),
                date: submission.draft.date,
                schedule: submission.draft.schedule,
                day_period: submission.draft.day_period,
                headcount: submission.draft.headcount,
                total_price: submission.breakdown.total_price,
                state: submission.state,
                walk_in: submission.draft.walk_in.clone(),
                owner_id: submission.owner.as_ref().map(|u| u.id.clone()),
            })
        }
    }

    fn service(snapshot: OccupancySnapshot) -> TicketService {
        let config = crate::config::test_config();
        let availability =
            AvailabilityService::new(config.clone(), Arc::new(FixedOccupancy(snapshot)));
        TicketService::new(
            config,
            Arc::new(EchoTickets),
            availability,
            SessionStore::new(),
        )
    }

    fn staff_token() -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(
            serde_json::json!({"id": "s1", "nombre": "Staff", "rol": "personal"})
                .to_string()
                .as_bytes(),
        );
        format!("{header}.{payload}.sig")
    }

    fn draft(walk_in: Option<WalkInCustomer>) -> NewTicket {
        NewTicket {
            date: Utc::now().date_naive() + chrono::Duration::days(3),
            schedule: Schedule::Day,
            day_period: None,
            headcount: 4,
            walk_in,
        }
    }

    #[tokio::test]
    async fn private_hold_blocks_ticket_sales_outright() {
        let svc = service(OccupancySnapshot {
            available: false,
            occupancy: 0,
            blocked_by_private: true,
        });
        let err = svc.create(draft(None)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn online_ticket_starts_pending() {
        let svc = service(OccupancySnapshot::vacant());
        let ticket = svc.create(draft(None)).await.unwrap();
        assert_eq!(ticket.state, crate::domain::models::reservation::ReservationState::Pending);
        assert_eq!(ticket.total_price, 20000);
    }

    #[tokio::test]
    async fn walk_in_requires_a_staff_session() {
        let svc = service(OccupancySnapshot::vacant());
        let walk_in = WalkInCustomer {
            name: "Cliente".into(),
            document: "12345678".into(),
            phone: None,
        };
        let err = svc.create(draft(Some(walk_in))).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn staff_walk_in_is_confirmed_immediately() {
        let svc = service(OccupancySnapshot::vacant());
        svc.session.restore(&staff_token());
        let walk_in = WalkInCustomer {
            name: "Cliente".into(),
            document: "12345678".into(),
            phone: Some("3015550101".into()),
        };
        let ticket = svc.create(draft(Some(walk_in))).await.unwrap();
        assert_eq!(
            ticket.state,
            crate::domain::models::reservation::ReservationState::Confirmed
        );
        assert!(ticket.walk_in.is_some());
    }

    #[tokio::test]
    async fn walk_in_without_document_is_rejected() {
        let svc = service(OccupancySnapshot::vacant());
        svc.session.restore(&staff_token());
        let walk_in = WalkInCustomer {
            name: "Cliente".into(),
            document: "  ".into(),
            phone: None,
        };
        let err = svc.create(draft(Some(walk_in))).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn capacity_exhaustion_rejects_oversized_groups() {
        let svc = service(OccupancySnapshot {
            available: true,
            occupancy: 118,
            blocked_by_private: false,
        });
        let err = svc.create(draft(None)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
