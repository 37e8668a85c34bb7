//! HTTP layer of the calculator
//!
//! Axum handlers for the index, the health check and the arithmetic endpoints.

pub mod handlers;
