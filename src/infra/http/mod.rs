pub mod auth_api;
pub mod client;
pub mod occupancy_api;
pub mod payments_api;
pub mod reservations_api;
pub mod staff_api;
pub mod tickets_api;
