//! Inbound wire shapes. Upstream payloads arrive in both camelCase and
//! snake_case revisions, and numeric ids occur alongside string ids; the
//! aliases and id coercion here collapse all of that into one internal shape.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use crate::domain::models::occupancy::OccupancySnapshot;
use crate::domain::models::payment::{Payment, PaymentMethod};
use crate::domain::models::reservation::{
    DayPeriod, Reservation, ReservationKind, ReservationState, Schedule,
};
use crate::domain::models::service::ServiceId;
use crate::domain::models::shift::StaffShift;
use crate::domain::models::ticket::{Ticket, WalkInCustomer};
use crate::domain::models::user::{Role, UserProfile};

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Num(i64),
    Str(String),
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            IdValue::Num(n) => n.to_string(),
            IdValue::Str(s) => s,
        }
    }
}

fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    IdValue::deserialize(deserializer).map(IdValue::into_string)
}

fn opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<IdValue>::deserialize(deserializer)?.map(IdValue::into_string))
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Deserialize)]
pub struct ReservationDto {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(default)]
    pub tipo: Option<ReservationKind>,
    #[serde(rename = "tipoReservaId", alias = "tipo_reserva_id", default)]
    pub tipo_reserva_id: Option<u8>,
    #[serde(rename = "fechaInicio", alias = "fecha_inicio")]
    pub fecha_inicio: NaiveDate,
    #[serde(rename = "fechaFin", alias = "fecha_fin", default)]
    pub fecha_fin: Option<NaiveDate>,
    #[serde(default)]
    pub horario: Option<Schedule>,
    #[serde(default)]
    pub jornada: Option<DayPeriod>,
    #[serde(alias = "numeroPersonas", alias = "numero_personas")]
    pub personas: u32,
    #[serde(
        alias = "serviciosAdicionales",
        alias = "servicios_adicionales",
        default
    )]
    pub servicios: BTreeSet<ServiceId>,
    #[serde(rename = "precioBase", alias = "precio_base", default)]
    pub precio_base: i64,
    #[serde(
        rename = "cargoAdicional",
        alias = "cargo_adicional",
        alias = "cargoMinimo",
        default
    )]
    pub cargo_adicional: i64,
    #[serde(rename = "serviciosTotal", alias = "servicios_total", default)]
    pub servicios_total: i64,
    #[serde(rename = "precioTotal", alias = "precio_total", default)]
    pub precio_total: i64,
    pub estado: ReservationState,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(
        rename = "clienteId",
        alias = "cliente_id",
        default,
        deserialize_with = "opt_id"
    )]
    pub cliente_id: Option<String>,
}

impl ReservationDto {
    pub fn into_reservation(self) -> Reservation {
        let kind = self
            .tipo
            .or(match self.tipo_reserva_id {
                Some(2) => Some(ReservationKind::Private),
                Some(1) => Some(ReservationKind::General),
                _ => None,
            })
            .unwrap_or(ReservationKind::General);

        // The total is derived, never trusted from the wire. Older payloads
        // carried only precioTotal; those become a bare base price.
        let mut base_price = self.precio_base;
        if base_price == 0
            && self.servicios_total == 0
            && self.cargo_adicional == 0
            && self.precio_total != 0
        {
            base_price = self.precio_total;
        }
        let total_price = base_price + self.servicios_total + self.cargo_adicional;

        Reservation {
            id: self.id,
            kind,
            date_start: self.fecha_inicio,
            date_end: self.fecha_fin.unwrap_or(self.fecha_inicio),
            schedule: self.horario.unwrap_or(Schedule::Day),
            day_period: self.jornada,
            headcount: self.personas,
            services: self.servicios,
            base_price,
            services_total: self.servicios_total,
            minimum_occupancy_surcharge: self.cargo_adicional,
            total_price,
            state: self.estado,
            observations: self.observaciones,
            owner_id: self.cliente_id,
        }
    }
}

#[derive(Deserialize)]
pub struct WalkInCustomerDto {
    pub nombre: String,
    pub documento: String,
    #[serde(default)]
    pub telefono: Option<String>,
}

#[derive(Deserialize)]
pub struct TicketDto {
    #[serde(deserialize_with = "id")]
    pub id: String,
    pub fecha: NaiveDate,
    #[serde(default)]
    pub horario: Option<Schedule>,
    #[serde(default)]
    pub jornada: Option<DayPeriod>,
    #[serde(alias = "numeroPersonas", alias = "numero_personas")]
    pub personas: u32,
    #[serde(rename = "precioTotal", alias = "precio_total", default)]
    pub precio_total: i64,
    pub estado: ReservationState,
    #[serde(rename = "esPresencial", alias = "es_presencial", default)]
    pub es_presencial: bool,
    #[serde(rename = "clientePresencial", alias = "cliente_presencial", default)]
    pub cliente_presencial: Option<WalkInCustomerDto>,
    #[serde(
        rename = "clienteId",
        alias = "cliente_id",
        default,
        deserialize_with = "opt_id"
    )]
    pub cliente_id: Option<String>,
}

impl TicketDto {
    pub fn into_ticket(self) -> Ticket {
        let walk_in = if self.es_presencial {
            self.cliente_presencial.map(|c| WalkInCustomer {
                name: c.nombre,
                document: c.documento,
                phone: c.telefono,
            })
        } else {
            None
        };
        Ticket {
            id: self.id,
            date: self.fecha,
            schedule: self.horario.unwrap_or(Schedule::Day),
            day_period: self.jornada,
            headcount: self.personas,
            total_price: self.precio_total,
            state: self.estado,
            walk_in,
            owner_id: self.cliente_id,
        }
    }
}

#[derive(Deserialize)]
pub struct OccupancyDto {
    #[serde(default = "default_true")]
    pub disponible: bool,
    #[serde(default)]
    pub ocupacion: u32,
    #[serde(
        rename = "bloqueadoPorPrivada",
        alias = "bloqueado_por_privada",
        default
    )]
    pub bloqueado_por_privada: bool,
}

impl OccupancyDto {
    pub fn into_snapshot(self) -> OccupancySnapshot {
        OccupancySnapshot {
            available: self.disponible,
            occupancy: self.ocupacion,
            blocked_by_private: self.bloqueado_por_privada,
        }
    }
}

#[derive(Deserialize)]
pub struct PaymentDto {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(alias = "reservaId", deserialize_with = "id")]
    pub reserva_id: String,
    #[serde(alias = "metodoPago")]
    pub metodo_pago: PaymentMethod,
    #[serde(alias = "createdAt", alias = "fecha", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PaymentDto {
    pub fn into_payment(self) -> Payment {
        Payment {
            id: self.id,
            reservation_id: self.reserva_id,
            method: self.metodo_pago,
            created_at: self.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct RoleEntryDto {
    pub name: String,
}

#[derive(Deserialize)]
pub struct UserDto {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(alias = "name")]
    pub nombre: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub documento: Option<String>,
    #[serde(alias = "role", default)]
    pub rol: Option<String>,
    #[serde(rename = "Roles", default)]
    pub roles: Option<Vec<RoleEntryDto>>,
}

impl UserDto {
    pub fn into_profile(self) -> UserProfile {
        let from_list = self
            .roles
            .as_ref()
            .and_then(|roles| roles.iter().find_map(|r| parse_role(&r.name)));
        let role = self
            .rol
            .as_deref()
            .and_then(parse_role)
            .or(from_list)
            .unwrap_or(Role::Customer);
        UserProfile {
            id: self.id,
            name: self.nombre,
            email: self.email,
            document: self.documento,
            role,
        }
    }
}

fn parse_role(value: &str) -> Option<Role> {
    match value {
        "administrador" => Some(Role::Admin),
        "personal" => Some(Role::Staff),
        "cliente" => Some(Role::Customer),
        _ => None,
    }
}

#[derive(Deserialize)]
pub struct ShiftDto {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(rename = "personalId", alias = "personal_id", deserialize_with = "id")]
    pub personal_id: String,
    pub fecha: NaiveDate,
}

impl ShiftDto {
    pub fn into_shift(self) -> StaffShift {
        StaffShift {
            id: self.id,
            staff_id: self.personal_id,
            date: self.fecha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn camel_case_reservation_payload_normalizes() {
        let dto: ReservationDto = serde_json::from_value(json!({
            "id": 42,
            "tipo": "privada",
            "fechaInicio": "2025-06-14",
            "fechaFin": "2025-06-15",
            "horario": "diurno",
            "numeroPersonas": 15,
            "serviciosAdicionales": ["cocina"],
            "precioBase": 750000,
            "serviciosTotal": 50000,
            "cargoAdicional": 0,
            "precioTotal": 999,
            "estado": "pendiente",
            "clienteId": 7
        }))
        .unwrap();
        let reservation = dto.into_reservation();
        assert_eq!(reservation.id, "42");
        assert_eq!(reservation.kind, ReservationKind::Private);
        assert_eq!(reservation.headcount, 15);
        assert_eq!(reservation.owner_id.as_deref(), Some("7"));
        // Derived, ignoring the bogus wire total.
        assert_eq!(reservation.total_price, 800000);
    }

    #[test]
    fn snake_case_reservation_payload_normalizes() {
        let dto: ReservationDto = serde_json::from_value(json!({
            "id": "r1",
            "tipo_reserva_id": 1,
            "fecha_inicio": "2025-06-20",
            "numero_personas": 4,
            "precio_total": 20000,
            "estado": "confirmada",
            "cliente_id": "u1"
        }))
        .unwrap();
        let reservation = dto.into_reservation();
        assert_eq!(reservation.kind, ReservationKind::General);
        assert_eq!(reservation.date_end, reservation.date_start);
        assert_eq!(reservation.schedule, Schedule::Day);
        // Only a total on the wire: treated as the base.
        assert_eq!(reservation.base_price, 20000);
        assert_eq!(reservation.total_price, 20000);
        assert_eq!(reservation.state, ReservationState::Confirmed);
    }

    #[test]
    fn occupancy_defaults_fill_missing_fields() {
        let dto: OccupancyDto = serde_json::from_value(json!({ "ocupacion": 30 })).unwrap();
        let snapshot = dto.into_snapshot();
        assert!(snapshot.available);
        assert_eq!(snapshot.occupancy, 30);
        assert!(!snapshot.blocked_by_private);
    }

    #[test]
    fn user_role_resolves_from_either_shape() {
        let flat: UserDto = serde_json::from_value(json!({
            "id": "u1", "nombre": "Ana", "rol": "personal"
        }))
        .unwrap();
        assert_eq!(flat.into_profile().role, Role::Staff);

        let nested: UserDto = serde_json::from_value(json!({
            "id": "u2", "name": "Luis", "Roles": [{"name": "personal"}]
        }))
        .unwrap();
        assert_eq!(nested.into_profile().role, Role::Staff);

        let unknown: UserDto = serde_json::from_value(json!({
            "id": "u3", "nombre": "Eve", "rol": "algo_raro"
        }))
        .unwrap();
        assert_eq!(unknown.into_profile().role, Role::Customer);
    }

    #[test]
    fn ticket_walk_in_round_trip() {
        let dto: TicketDto = serde_json::from_value(json!({
            "id": 9,
            "fecha": "2025-06-20",
            "horario": "nocturno",
            "numeroPersonas": 2,
            "precioTotal": 20000,
            "estado": "confirmada",
            "esPresencial": true,
            "clientePresencial": {"nombre": "Cliente", "documento": "12345678"}
        }))
        .unwrap();
        let ticket = dto.into_ticket();
        assert_eq!(ticket.schedule, Schedule::Night);
        assert_eq!(ticket.walk_in.as_ref().map(|w| w.document.as_str()), Some("12345678"));
    }
}
