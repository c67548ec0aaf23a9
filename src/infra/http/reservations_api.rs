use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::api::dtos::requests::{
    CreateReservationRequest, SetHeadcountRequest, SetServicesRequest, SetStateRequest,
    UpdateReservationRequest,
};
use crate::api::dtos::responses::ReservationDto;
use crate::domain::models::reservation::{
    Reservation, ReservationChanges, ReservationState, ReservationSubmission,
};
use crate::domain::models::service::ServiceId;
use crate::domain::ports::ReservationsApi;
use crate::error::AppError;
use crate::infra::http::client::HttpClient;

pub struct HttpReservationsApi {
    http: HttpClient,
}

impl HttpReservationsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReservationsApi for HttpReservationsApi {
    async fn list(&self) -> Result<Vec<Reservation>, AppError> {
        let response = self.http.get("/api/reservas").await?;
        let dtos: Vec<ReservationDto> = HttpClient::expect_json(response).await?;
        Ok(dtos.into_iter().map(ReservationDto::into_reservation).collect())
    }

    async fn create(&self, submission: &ReservationSubmission) -> Result<Reservation, AppError> {
        let response = self
            .http
            .post("/api/reservas", &CreateReservationRequest::from(submission))
            .await?;
        let dto: ReservationDto = HttpClient::expect_json(response).await?;
        Ok(dto.into_reservation())
    }

    async fn update(&self, id: &str, changes: &ReservationChanges) -> Result<Reservation, AppError> {
        let response = self
            .http
            .put(
                &format!("/api/reservas/{id}"),
                &UpdateReservationRequest::from(changes),
            )
            .await?;
        let dto: ReservationDto = HttpClient::expect_json(response).await?;
        Ok(dto.into_reservation())
    }

    async fn set_state(&self, id: &str, state: ReservationState) -> Result<Reservation, AppError> {
        let response = self
            .http
            .patch(&format!("/api/reservas/{id}"), &SetStateRequest { estado: state })
            .await?;
        let dto: ReservationDto = HttpClient::expect_json(response).await?;
        Ok(dto.into_reservation())
    }

    async fn set_headcount(&self, id: &str, headcount: u32) -> Result<Reservation, AppError> {
        let response = self
            .http
            .patch(
                &format!("/api/reservas/{id}/personas"),
                &SetHeadcountRequest {
                    numero_personas: headcount,
                },
            )
            .await?;
        let dto: ReservationDto = HttpClient::expect_json(response).await?;
        Ok(dto.into_reservation())
    }

    async fn set_services(
        &self,
        id: &str,
        services: &BTreeSet<ServiceId>,
    ) -> Result<Reservation, AppError> {
        let response = self
            .http
            .patch(
                &format!("/api/reservas/{id}/servicios"),
                &SetServicesRequest {
                    servicios: services.iter().copied().collect(),
                },
            )
            .await?;
        let dto: ReservationDto = HttpClient::expect_json(response).await?;
        Ok(dto.into_reservation())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let response = self.http.delete(&format!("/api/reservas/{id}")).await?;
        HttpClient::expect_success(response).await
    }
}
