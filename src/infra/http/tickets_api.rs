use async_trait::async_trait;

use crate::api::dtos::requests::CreateTicketRequest;
use crate::api::dtos::responses::TicketDto;
use crate::domain::models::ticket::{Ticket, TicketSubmission};
use crate::domain::ports::TicketsApi;
use crate::error::AppError;
use crate::infra::http::client::HttpClient;

pub struct HttpTicketsApi {
    http: HttpClient,
}

impl HttpTicketsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TicketsApi for HttpTicketsApi {
    async fn list(&self) -> Result<Vec<Ticket>, AppError> {
        let response = self.http.get("/api/entradas").await?;
        let dtos: Vec<TicketDto> = HttpClient::expect_json(response).await?;
        Ok(dtos.into_iter().map(TicketDto::into_ticket).collect())
    }

    async fn create(&self, submission: &TicketSubmission) -> Result<Ticket, AppError> {
        let response = self
            .http
            .post("/api/entradas", &CreateTicketRequest::from(submission))
            .await?;
        let dto: TicketDto = HttpClient::expect_json(response).await?;
        Ok(dto.into_ticket())
    }
}
