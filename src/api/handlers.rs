//! HTTP request handlers for the reports API.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{summarize_expenses, AttendanceAggregator};
use crate::error::ReportError;
use crate::export::{serialize, ExportOutput};

use super::request::{AttendanceReportRequest, ExpenseReportRequest, ExportRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/attendance", post(attendance_report_handler))
        .route("/reports/expenses", post(expense_report_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Handler for POST /reports/attendance.
async fn attendance_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let normalized = match request.normalize() {
        Ok(normalized) => normalized,
        Err(err) => return failure_response(correlation_id, err, "Attendance request rejected"),
    };

    let start_time = Instant::now();
    let aggregator = AttendanceAggregator::new(state.config());
    match aggregator.aggregate(
        &normalized.query,
        &normalized.punches,
        &normalized.leaves,
        &normalized.roster,
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                from = %normalized.query.from,
                to = %normalized.query.to,
                punches = normalized.punches.len(),
                rows = report.rows.len(),
                working_days = report.total_working_days,
                duration_us = start_time.elapsed().as_micros(),
                "Attendance report completed"
            );
            json_response(StatusCode::OK, &report)
        }
        Err(err) => failure_response(correlation_id, err, "Attendance report failed"),
    }
}

/// Handler for POST /reports/expenses.
async fn expense_report_handler(
    payload: Result<Json<ExpenseReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing expense report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let (filter, expenses) = match request.normalize() {
        Ok(normalized) => normalized,
        Err(err) => return failure_response(correlation_id, err, "Expense request rejected"),
    };

    match summarize_expenses(&expenses, &filter) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                expenses = expenses.len(),
                matched = summary.expense_count,
                total = %summary.total_amount,
                "Expense report completed"
            );
            json_response(StatusCode::OK, &summary)
        }
        Err(err) => failure_response(correlation_id, err, "Expense report failed"),
    }
}

/// Handler for POST /export.
///
/// Responds 204 when there are no records, otherwise with the file as an
/// attachment.
async fn export_handler(payload: Result<Json<ExportRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let fields = request.field_map();
    let output = match serialize(&request.records, &fields, request.format) {
        Ok(output) => output,
        Err(err) => return failure_response(correlation_id, err, "Export failed"),
    };

    let body = match output {
        ExportOutput::NoData => {
            info!(correlation_id = %correlation_id, "No data to export");
            return StatusCode::NO_CONTENT.into_response();
        }
        ExportOutput::Csv(text) => text.into_bytes(),
        ExportOutput::Xlsx(bytes) => bytes,
    };

    info!(
        correlation_id = %correlation_id,
        format = request.format.extension(),
        records = request.records.len(),
        bytes = body.len(),
        "Export completed"
    );

    let disposition = format!(
        "attachment; filename=\"report.{}\"",
        request.format.extension()
    );
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, request.format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn failure_response(correlation_id: Uuid, err: ReportError, message: &str) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "{}", message);
    ApiErrorResponse::from(err).into_response()
}

/// Maps a body extraction failure to a 400 with a JSON error body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
