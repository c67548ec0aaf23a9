use async_trait::async_trait;

use crate::api::dtos::requests::CreatePaymentRequest;
use crate::api::dtos::responses::PaymentDto;
use crate::domain::models::payment::{Payment, PaymentMethod};
use crate::domain::ports::PaymentsApi;
use crate::error::AppError;
use crate::infra::http::client::HttpClient;

pub struct HttpPaymentsApi {
    http: HttpClient,
}

impl HttpPaymentsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PaymentsApi for HttpPaymentsApi {
    async fn list(&self) -> Result<Vec<Payment>, AppError> {
        let response = self.http.get("/api/pagos").await?;
        let dtos: Vec<PaymentDto> = HttpClient::expect_json(response).await?;
        Ok(dtos.into_iter().map(PaymentDto::into_payment).collect())
    }

    async fn register(
        &self,
        reservation_id: &str,
        method: PaymentMethod,
    ) -> Result<Payment, AppError> {
        let response = self
            .http
            .post(
                "/api/pagos",
                &CreatePaymentRequest {
                    reserva_id: reservation_id.to_string(),
                    metodo_pago: method.as_str().to_string(),
                },
            )
            .await?;
        let dto: PaymentDto = HttpClient::expect_json(response).await?;
        Ok(dto.into_payment())
    }
}
