//! HTTP request handlers for the Payroll Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashSet;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_overtime_pay, calculate_period_pay, compute_breakdown, count_working_days,
    period_salary, prorate, resolve_period, validate_template, yearly_periods,
};
use crate::config::{SalaryCycleConfig, SalaryTemplate, validate_cycle_config};
use crate::error::{EngineError, ensure_non_negative};
use crate::models::{Employee, WeeklyOffDays};

use super::request::{
    BreakdownRequest, HolidaySelection, OvertimeRequest, PeriodPayRequest, ProrateRequest,
    ResolvePeriodRequest, UpdateSalaryCycleRequest, WorkingDaysRequest, YearlyPeriodsRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, ProrateResponse, WorkingDaysResponse, YearlyPeriodsResponse,
};
use super::state::AppState;

/// Longest range, in calendar days, accepted by `POST /working-days`.
pub const MAX_WORKING_DAYS_SPAN: i64 = 3_660;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/periods/resolve", post(resolve_period_handler))
        .route("/periods/yearly", post(yearly_periods_handler))
        .route("/working-days", post(working_days_handler))
        .route("/prorate", post(prorate_handler))
        .route("/overtime", post(overtime_handler))
        .route("/breakdown", post(breakdown_handler))
        .route("/period-pay", post(period_pay_handler))
        .route("/validate/template", post(validate_template_handler))
        .route("/validate/salary-cycle", post(validate_salary_cycle_handler))
        .route(
            "/config/salary-cycle",
            get(get_salary_cycle_handler).put(update_salary_cycle_handler),
        )
        .route("/config/salary-cycle/history", get(salary_cycle_history_handler))
        .with_state(state)
}

/// Handler for POST /periods/resolve.
///
/// Returns the period containing the given date.
async fn resolve_period_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolvePeriodRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period resolution request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let cycle = cycle_or_current(&state, request.salary_cycle).await;

    match resolve_period(request.date, &cycle) {
        Ok(period) => {
            info!(
                correlation_id = %correlation_id,
                date = %request.date,
                period = %period.label,
                "Period resolved"
            );
            json_response(StatusCode::OK, &period)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /periods/yearly.
///
/// Returns every period of the cycle for a calendar year.
async fn yearly_periods_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearlyPeriodsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing yearly periods request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let cycle = cycle_or_current(&state, request.salary_cycle).await;

    match yearly_periods(request.year, &cycle) {
        Ok(periods) => {
            info!(
                correlation_id = %correlation_id,
                year = request.year,
                cycle_type = %cycle.cycle_type,
                periods = periods.len(),
                "Yearly periods generated"
            );
            json_response(
                StatusCode::OK,
                &YearlyPeriodsResponse {
                    year: request.year,
                    cycle_type: cycle.cycle_type,
                    periods,
                },
            )
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /working-days.
///
/// Counts the working days in an inclusive date range.
async fn working_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working days request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let span_days = (request.end_date - request.start_date).num_days();
    if span_days >= MAX_WORKING_DAYS_SPAN {
        warn!(
            correlation_id = %correlation_id,
            span_days,
            "Working days range too long"
        );
        return json_response(
            StatusCode::BAD_REQUEST,
            &ApiError::validation_error(format!(
                "date range must not exceed {} days, got {}",
                MAX_WORKING_DAYS_SPAN,
                span_days + 1
            )),
        );
    }

    let (holidays, weekly_off_days) = resolve_calendar(&state, request.calendar);
    let working_days = count_working_days(
        request.start_date,
        request.end_date,
        &holidays,
        weekly_off_days,
    );

    info!(
        correlation_id = %correlation_id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        working_days,
        "Working days counted"
    );
    json_response(
        StatusCode::OK,
        &WorkingDaysResponse {
            start_date: request.start_date,
            end_date: request.end_date,
            working_days,
        },
    )
}

/// Handler for POST /prorate.
async fn prorate_handler(payload: Result<Json<ProrateRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pro-rata request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match request.day_counts() {
        Ok((actual, total)) => {
            let amount = prorate(request.amount, actual, total);
            info!(
                correlation_id = %correlation_id,
                actual_working_days = actual,
                total_working_days = total,
                amount = %amount,
                "Salary prorated"
            );
            json_response(StatusCode::OK, &ProrateResponse { amount })
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /overtime.
async fn overtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let cycle = cycle_or_current(&state, request.salary_cycle).await;

    match calculate_overtime_pay(
        request.base_monthly_salary,
        request.overtime_hours,
        &cycle,
        1,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                overtime_hours = %result.overtime_hours,
                amount = %result.amount,
                "Overtime calculated"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /breakdown.
///
/// Computes the monthly compensation breakdown for an annual CTC.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let config = state.config().config();
    let template = request.template.unwrap_or_else(|| config.template().clone());
    let tax = request.tax.unwrap_or_else(|| config.tax().clone());

    let start_time = Instant::now();
    match compute_breakdown(request.annual_ctc, &template, &tax) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                annual_ctc = %breakdown.annual_ctc,
                net_salary = %breakdown.net_salary,
                warnings = breakdown.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Breakdown computed"
            );
            json_response(StatusCode::OK, &breakdown)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /period-pay.
///
/// Pays an employee for the period containing the reference date, prorated
/// by the working days they were employed.
async fn period_pay_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodPayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period pay request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    if let Err(err) = ensure_non_negative("monthly_salary", request.monthly_salary) {
        return engine_error_response(err, correlation_id);
    }

    let cycle = cycle_or_current(&state, request.salary_cycle).await;
    let (holidays, weekly_off_days) = resolve_calendar(&state, request.calendar);
    let employee: Employee = request.employee.into();
    let salary = period_salary(request.monthly_salary, cycle.cycle_type);

    match calculate_period_pay(
        &employee,
        request.reference_date,
        salary,
        &cycle,
        &holidays,
        weekly_off_days,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                period = %result.period.label,
                amount = %result.amount,
                "Period pay calculated"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /validate/template.
async fn validate_template_handler(
    payload: Result<Json<SalaryTemplate>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let template = match parse_request(payload, correlation_id) {
        Ok(template) => template,
        Err(response) => return response,
    };
    let result = validate_template(&template);

    info!(
        correlation_id = %correlation_id,
        template = %template.name,
        valid = result.valid,
        total_pct = %result.total_pct,
        "Template validated"
    );
    json_response(StatusCode::OK, &result)
}

/// Handler for POST /validate/salary-cycle.
async fn validate_salary_cycle_handler(
    payload: Result<Json<SalaryCycleConfig>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let cycle = match parse_request(payload, correlation_id) {
        Ok(cycle) => cycle,
        Err(response) => return response,
    };
    let result = validate_cycle_config(&cycle);

    info!(
        correlation_id = %correlation_id,
        valid = result.valid,
        errors = result.errors.len(),
        "Salary cycle validated"
    );
    json_response(StatusCode::OK, &result)
}

/// Handler for GET /config/salary-cycle.
///
/// Returns the revision currently in force.
async fn get_salary_cycle_handler(State(state): State<AppState>) -> Response {
    let history = state.salary_cycle_history().read().await;
    json_response(StatusCode::OK, history.latest())
}

/// Handler for PUT /config/salary-cycle.
///
/// Validates the new cycle and appends it as a new revision. Invalid
/// configurations are never recorded.
async fn update_salary_cycle_handler(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSalaryCycleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary cycle update");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let author = request.author.trim();
    if author.is_empty() {
        warn!(correlation_id = %correlation_id, "Salary cycle update without author");
        return json_response(
            StatusCode::BAD_REQUEST,
            &ApiError::validation_error("author must not be empty"),
        );
    }

    if let Err(err) = validate_cycle_config(&request.salary_cycle).into_result("salary_cycle") {
        return engine_error_response(err, correlation_id);
    }

    let mut history = state.salary_cycle_history().write().await;
    let revision = history.record(request.salary_cycle, author, Utc::now());
    info!(
        correlation_id = %correlation_id,
        version = revision.version,
        author = %revision.author,
        cycle_type = %revision.config.cycle_type,
        "Salary cycle revision saved"
    );
    json_response(StatusCode::OK, revision)
}

/// Handler for GET /config/salary-cycle/history.
///
/// Returns every saved revision, oldest first.
async fn salary_cycle_history_handler(State(state): State<AppState>) -> Response {
    let history = state.salary_cycle_history().read().await;
    json_response(StatusCode::OK, history.revisions())
}

/// Unwraps a JSON payload, converting extractor rejections into 400 responses.
fn parse_request<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if is_validation_failure(&body_text) {
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
    Err(json_response(StatusCode::BAD_REQUEST, &error))
}

/// Returns true for well-formed JSON that fails a domain rule during
/// deserialization (missing fields, unknown cycle types, bad off-days).
fn is_validation_failure(body_text: &str) -> bool {
    ["missing field", "unknown cycle type", "weekly off-day", "end_day"]
        .iter()
        .any(|needle| body_text.contains(needle))
}

/// Logs an engine error and converts it into its HTTP response.
fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        validation = err.is_validation_error(),
        "Request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Returns the request's cycle, or the cycle currently in force.
async fn cycle_or_current(
    state: &AppState,
    requested: Option<SalaryCycleConfig>,
) -> SalaryCycleConfig {
    match requested {
        Some(cycle) => cycle,
        None => state.current_salary_cycle().await,
    }
}

/// Resolves a request's holiday selection against the configured calendar.
fn resolve_calendar(
    state: &AppState,
    selection: HolidaySelection,
) -> (HashSet<NaiveDate>, WeeklyOffDays) {
    let holidays = match selection.holidays {
        Some(dates) => dates.into_iter().collect(),
        None => state.holiday_dates(selection.jurisdiction.as_deref()),
    };
    (holidays, selection.weekly_off_days.unwrap_or_default())
}
