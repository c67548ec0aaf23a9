pub mod occupancy;
pub mod payment;
pub mod reservation;
pub mod service;
pub mod shift;
pub mod ticket;
pub mod user;
