use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::dtos::responses::OccupancyDto;
use crate::domain::models::occupancy::OccupancySnapshot;
use crate::domain::models::reservation::{ReservationKind, Schedule};
use crate::domain::ports::OccupancyApi;
use crate::error::AppError;
use crate::infra::http::client::HttpClient;

pub struct HttpOccupancyApi {
    http: HttpClient,
}

impl HttpOccupancyApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl OccupancyApi for HttpOccupancyApi {
    async fn occupancy(
        &self,
        date: NaiveDate,
        schedule: Schedule,
        kind: ReservationKind,
    ) -> Result<OccupancySnapshot, AppError> {
        let path = format!(
            "/api/ocupacion?fecha={}&horario={}&tipo={}",
            date.format("%Y-%m-%d"),
            schedule.as_str(),
            kind.as_str()
        );
        let response = self.http.get(&path).await?;
        let dto: OccupancyDto = HttpClient::expect_json(response).await?;
        Ok(dto.into_snapshot())
    }
}
