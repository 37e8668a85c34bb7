//! Axum HTTP handlers for the web server
//!
//! Each arithmetic handler receives the raw `<a>&<b>` segment and defers to the domain layer.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::clock::format_timestamp;
use crate::domain::{evaluate, Operation, OperationRequest, OperationResult};
use crate::errors::AppError;
use crate::AppState;

pub const SERVICE_NAME: &str = "web-calculator";

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

pub async fn index() -> Json<IndexResponse> {
    let mut endpoints: BTreeMap<&'static str, String> = Operation::ALL
        .into_iter()
        .map(|operation| (operation.name(), operation.path_template()))
        .collect();
    endpoints.insert("health", "/health".to_string());

    Json(IndexResponse {
        message: "Web Calculator API",
        endpoints,
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: format_timestamp(&state.clock.now()),
    })
}

pub async fn add(
    operands: Result<Path<String>, PathRejection>,
) -> Result<Json<OperationResult>, AppError> {
    calculate(Operation::Add, operands)
}

pub async fn subtract(
    operands: Result<Path<String>, PathRejection>,
) -> Result<Json<OperationResult>, AppError> {
    calculate(Operation::Subtract, operands)
}

pub async fn multiply(
    operands: Result<Path<String>, PathRejection>,
) -> Result<Json<OperationResult>, AppError> {
    calculate(Operation::Multiply, operands)
}

pub async fn divide(
    operands: Result<Path<String>, PathRejection>,
) -> Result<Json<OperationResult>, AppError> {
    calculate(Operation::Divide, operands)
}

/// A segment that does not percent-decode to UTF-8 cannot hold a number.
fn calculate(
    operation: Operation,
    segment: Result<Path<String>, PathRejection>,
) -> Result<Json<OperationResult>, AppError> {
    let Path(segment) = segment.map_err(|rejection| {
        debug!(error = %rejection, "operand segment rejected");
        AppError::InvalidInput
    })?;
    let request = OperationRequest::from_segment(operation, &segment).ok_or(AppError::NotFound)?;
    let outcome = evaluate(&request)?;
    Ok(Json(outcome))
}
