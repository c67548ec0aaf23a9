use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One staff shift block created for a calendar day.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StaffShift {
    pub id: String,
    pub staff_id: String,
    pub date: NaiveDate,
}
