pub mod admin;
pub mod auth;
pub mod blog;
pub mod bookings;
pub mod contact;
pub mod destinations;
pub mod packages;
pub mod uploads;
