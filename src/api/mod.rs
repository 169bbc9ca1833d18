//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module exposes the engine's library interface as JSON endpoints:
//! period resolution, working-day counting, pro-rata, overtime, compensation
//! breakdowns, validation, and the versioned salary cycle configuration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_WORKING_DAYS_SPAN, create_router};
pub use request::{
    BreakdownRequest, EmployeeRequest, HolidaySelection, OvertimeRequest, PeriodPayRequest,
    ProrateRequest, ResolvePeriodRequest, UpdateSalaryCycleRequest, WorkingDaysRequest,
    YearlyPeriodsRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, ProrateResponse, WorkingDaysResponse, YearlyPeriodsResponse,
};
pub use state::{AppState, SYSTEM_AUTHOR};
