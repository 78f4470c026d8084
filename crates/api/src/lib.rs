//! HTTP API for the Voyara tour-operator platform.
//!
//! Public catalog/content endpoints plus the authenticated admin
//! back-office, built on axum. Binary entry point is `main.rs`; the library
//! exposes the router and supporting modules so integration tests can build
//! the full application.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
