use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Day-rated optional services a reservation can attach.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceId {
    #[serde(rename = "cocina")]
    Kitchen,
    #[serde(rename = "cuarto")]
    Room,
}

impl ServiceId {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceId::Kitchen => "cocina",
            ServiceId::Room => "cuarto",
        }
    }

    pub fn day_rate(self, config: &Config) -> i64 {
        match self {
            ServiceId::Kitchen => config.kitchen_service_price,
            ServiceId::Room => config.room_service_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalService {
    pub id: ServiceId,
    pub name: &'static str,
    pub description: &'static str,
    pub day_rate: i64,
}

pub fn catalog(config: &Config) -> Vec<AdditionalService> {
    vec![
        AdditionalService {
            id: ServiceId::Kitchen,
            name: "Kitchen service",
            description: "Full access to the venue kitchen",
            day_rate: config.kitchen_service_price,
        },
        AdditionalService {
            id: ServiceId::Room,
            name: "Room service",
            description: "Private room, rated per night",
            day_rate: config.room_service_price,
        },
    ]
}
