use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::dtos::requests::CreateShiftRequest;
use crate::api::dtos::responses::{ShiftDto, UserDto};
use crate::domain::models::shift::StaffShift;
use crate::domain::models::user::UserProfile;
use crate::domain::ports::StaffApi;
use crate::error::AppError;
use crate::infra::http::client::HttpClient;

pub struct HttpStaffApi {
    http: HttpClient,
}

impl HttpStaffApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl StaffApi for HttpStaffApi {
    async fn list_users(&self) -> Result<Vec<UserProfile>, AppError> {
        let response = self.http.get("/api/users").await?;
        let dtos: Vec<UserDto> = HttpClient::expect_json(response).await?;
        Ok(dtos.into_iter().map(UserDto::into_profile).collect())
    }

    async fn create_shifts(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<StaffShift>, AppError> {
        // The trailing slash is load-bearing on this backend route.
        let response = self
            .http
            .post(
                "/api/turnos/",
                &CreateShiftRequest {
                    personal_id: staff_id.to_string(),
                    fecha: date,
                },
            )
            .await?;
        let dtos: Vec<ShiftDto> = HttpClient::expect_json(response).await?;
        Ok(dtos.into_iter().map(ShiftDto::into_shift).collect())
    }
}
