//! Outbound wire shapes. Field names are the backend's contract; the
//! creation wizards historically submitted camelCase, except where noted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::reservation::{
    access_window, DayPeriod, ReservationChanges, ReservationKind, ReservationState,
    ReservationSubmission, Schedule,
};
use crate::domain::models::service::ServiceId;
use crate::domain::models::ticket::{TicketSubmission, WalkInCustomer};
use crate::domain::models::user::{Credentials, Registration};

#[derive(Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub documento: String,
    pub password: String,
}

impl From<&Registration> for RegisterRequest {
    fn from(registration: &Registration) -> Self {
        Self {
            nombre: registration.name.clone(),
            email: registration.email.clone(),
            telefono: registration.phone.clone(),
            documento: registration.document.clone(),
            password: registration.password.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub tipo_reserva_id: u8,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub horario_inicio: &'static str,
    pub horario_fin: &'static str,
    pub personas: u32,
    pub servicios: Vec<ServiceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_email: Option<String>,
    pub precio_base: i64,
    pub cargo_adicional: i64,
    pub precio_total: i64,
    pub estado: ReservationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<String>,
}

impl From<&ReservationSubmission> for CreateReservationRequest {
    fn from(submission: &ReservationSubmission) -> Self {
        let draft = &submission.draft;
        let (window_start, window_end) = access_window(draft.schedule, draft.day_period);
        let owner = submission.owner.as_ref();
        Self {
            tipo_reserva_id: match draft.kind {
                ReservationKind::General => 1,
                ReservationKind::Private => 2,
            },
            fecha_inicio: draft.date_start,
            fecha_fin: draft.date_end.unwrap_or(draft.date_start),
            horario_inicio: window_start,
            horario_fin: window_end,
            personas: draft.headcount,
            servicios: draft.services.iter().copied().collect(),
            observaciones: draft.observations.clone(),
            documento: owner.and_then(|u| u.document.clone()),
            cliente_nombre: owner.map(|u| u.name.clone()),
            cliente_email: owner.and_then(|u| u.email.clone()),
            precio_base: submission.breakdown.base_price,
            cargo_adicional: submission.breakdown.minimum_occupancy_surcharge,
            precio_total: submission.breakdown.total_price,
            estado: submission.state,
            cliente_id: owner.map(|u| u.id.clone()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horario: Option<Schedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jornada: Option<DayPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_personas: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servicios: Option<Vec<ServiceId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

impl From<&ReservationChanges> for UpdateReservationRequest {
    fn from(changes: &ReservationChanges) -> Self {
        Self {
            fecha_inicio: changes.date_start,
            fecha_fin: changes.date_end,
            horario: changes.schedule,
            jornada: changes.day_period,
            numero_personas: changes.headcount,
            servicios: changes
                .services
                .as_ref()
                .map(|s| s.iter().copied().collect()),
            observaciones: changes.observations.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct SetStateRequest {
    pub estado: ReservationState,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetHeadcountRequest {
    pub numero_personas: u32,
}

#[derive(Serialize)]
pub struct SetServicesRequest {
    pub servicios: Vec<ServiceId>,
}

#[derive(Serialize)]
pub struct WalkInCustomerPayload {
    pub nombre: String,
    pub documento: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
}

impl From<&WalkInCustomer> for WalkInCustomerPayload {
    fn from(walk_in: &WalkInCustomer) -> Self {
        Self {
            nombre: walk_in.name.clone(),
            documento: walk_in.document.clone(),
            telefono: walk_in.phone.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub tipo: &'static str,
    pub fecha: NaiveDate,
    pub horario: Schedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jornada: Option<DayPeriod>,
    pub numero_personas: u32,
    pub es_presencial: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_presencial: Option<WalkInCustomerPayload>,
    pub precio_total: i64,
    pub estado: ReservationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<String>,
}

impl From<&TicketSubmission> for CreateTicketRequest {
    fn from(submission: &TicketSubmission) -> Self {
        let draft = &submission.draft;
        Self {
            tipo: "general",
            fecha: draft.date,
            horario: draft.schedule,
            jornada: draft.day_period,
            numero_personas: draft.headcount,
            es_presencial: draft.walk_in.is_some(),
            cliente_presencial: draft.walk_in.as_ref().map(WalkInCustomerPayload::from),
            precio_total: submission.breakdown.total_price,
            estado: submission.state,
            cliente_id: submission.owner.as_ref().map(|u| u.id.clone()),
        }
    }
}

/// `reservaId` is camelCase but `metodo_pago` is snake_case upstream; both
/// are preserved verbatim.
#[derive(Serialize)]
pub struct CreatePaymentRequest {
    #[serde(rename = "reservaId")]
    pub reserva_id: String,
    pub metodo_pago: String,
}

#[derive(Serialize)]
pub struct CreateShiftRequest {
    #[serde(rename = "personalId")]
    pub personal_id: String,
    pub fecha: NaiveDate,
}
