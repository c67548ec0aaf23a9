use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::models::shift::StaffShift;
use crate::domain::models::user::UserProfile;
use crate::domain::ports::StaffApi;
use crate::domain::services::capability::{has_capability, Capability};
use crate::error::AppError;
use crate::session::SessionStore;

/// Staff roster and day-shift scheduling.
pub struct ShiftService {
    api: Arc<dyn StaffApi>,
    session: SessionStore,
}

impl ShiftService {
    pub fn new(api: Arc<dyn StaffApi>, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// The user roster filtered down to schedulable staff.
    pub async fn staff_roster(&self) -> Result<Vec<UserProfile>, AppError> {
        let users = self.api.list_users().await?;
        Ok(users.into_iter().filter(|u| u.is_staff()).collect())
    }

    pub async fn create_shifts(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<StaffShift>, AppError> {
        let requester = self.session.user().ok_or(AppError::Unauthorized)?;
        if !has_capability(&requester, Capability::ManageShifts) {
            return Err(AppError::Unauthorized);
        }
        if staff_id.is_empty() {
            return Err(AppError::Validation(
                "Staff member and date are required".into(),
            ));
        }
        let shifts = self.api.create_shifts(staff_id, date).await?;
        info!("created {} shift blocks for {} on {}", shifts.len(), staff_id, date);
        Ok(shifts)
    }
}
