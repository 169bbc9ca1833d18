//! Integration tests for the Payroll Calculation Engine API.
//!
//! This test suite drives the HTTP surface end to end:
//! - Period resolution and yearly period enumeration
//! - Working-day counting with explicit and configured holidays
//! - Pro-rata, overtime and period pay
//! - Compensation breakdowns, including warnings
//! - Template and salary cycle validation
//! - Versioned salary cycle configuration
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, MAX_WORKING_DAYS_SPAN, create_router};
use payroll_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal serialized as a JSON string.
fn decimal_at(value: &Value) -> Decimal {
    decimal(value.as_str().expect("decimal should serialize as a string"))
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, "POST", uri, Some(body)).await
}

fn cycle(cycle_type: &str) -> Value {
    json!({
        "type": cycle_type,
        "start_day": 1,
        "end_day": "last",
        "working_days_per_month": 26,
        "working_hours_per_day": 8,
        "overtime_multiplier": 2
    })
}

fn default_tax() -> Value {
    json!({
        "pf_employee_pct": 12,
        "pf_employer_pct": 12,
        "pf_wage_ceiling": 15000,
        "esi_employee_pct": "0.75",
        "esi_employer_pct": "3.25",
        "esi_wage_ceiling": 21000,
        "professional_tax": 200,
        "tds_enabled": true
    })
}

fn assert_error_code(status: StatusCode, body: &Value, expected_status: StatusCode, code: &str) {
    assert_eq!(status, expected_status, "unexpected status, body: {}", body);
    assert_eq!(body["code"], code, "unexpected error code, body: {}", body);
}

// =============================================================================
// Period Resolution
// =============================================================================

#[tokio::test]
async fn test_resolve_period_with_configured_monthly_cycle() {
    let (status, period) = post(
        create_router_for_test(),
        "/periods/resolve",
        json!({"date": "2026-02-10"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(period["start_date"], "2026-02-01");
    assert_eq!(period["end_date"], "2026-02-28");
    assert_eq!(period["label"], "February 2026");
}

#[tokio::test]
async fn test_resolve_period_semi_monthly_scenario() {
    let (status, period) = post(
        create_router_for_test(),
        "/periods/resolve",
        json!({"date": "2026-02-10", "salary_cycle": cycle("semi_monthly")}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(period["start_date"], "2026-02-01");
    assert_eq!(period["end_date"], "2026-02-15");
    assert_eq!(period["label"], "February 2026 (1-15)");
}

#[tokio::test]
async fn test_resolve_period_weekly() {
    let (status, period) = post(
        create_router_for_test(),
        "/periods/resolve",
        json!({"date": "2026-02-15", "salary_cycle": cycle("weekly")}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(period["start_date"], "2026-02-09");
    assert_eq!(period["end_date"], "2026-02-15");
    assert_eq!(period["label"], "Week 07, 2026");
}

#[tokio::test]
async fn test_resolve_period_rejects_out_of_range_cycle() {
    let mut bad_cycle = cycle("monthly");
    bad_cycle["start_day"] = json!(0);
    bad_cycle["working_hours_per_day"] = json!(25);

    let (status, body) = post(
        create_router_for_test(),
        "/periods/resolve",
        json!({"date": "2026-02-10", "salary_cycle": bad_cycle}),
    )
    .await;

    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "INVALID_CONFIG");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("start_day"));
    assert!(details.contains("working_hours_per_day"));
}

#[tokio::test]
async fn test_resolve_period_rejects_unknown_cycle_type() {
    let (status, body) = post(
        create_router_for_test(),
        "/periods/resolve",
        json!({"date": "2026-02-10", "salary_cycle": cycle("quarterly")}),
    )
    .await;

    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("quarterly"));
}

// =============================================================================
// Yearly Periods
// =============================================================================

#[tokio::test]
async fn test_yearly_periods_counts_per_cycle_type() {
    for (cycle_type, expected) in [
        ("monthly", 12),
        ("semi_monthly", 24),
        ("bi_weekly", 27),
        ("weekly", 53),
    ] {
        let (status, body) = post(
            create_router_for_test(),
            "/periods/yearly",
            json!({"year": 2026, "salary_cycle": cycle(cycle_type)}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["year"], 2026);
        assert_eq!(body["cycle_type"], cycle_type);
        assert_eq!(
            body["periods"].as_array().unwrap().len(),
            expected,
            "period count for {}",
            cycle_type
        );
    }
}

#[tokio::test]
async fn test_yearly_bi_weekly_spills_into_next_year() {
    let (status, body) = post(
        create_router_for_test(),
        "/periods/yearly",
        json!({"year": 2026, "salary_cycle": cycle("bi_weekly")}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let periods = body["periods"].as_array().unwrap();
    let last = &periods[periods.len() - 1];
    assert_eq!(last["start_date"], "2026-12-31");
    assert_eq!(last["end_date"], "2027-01-13");
}

#[tokio::test]
async fn test_yearly_periods_beyond_calendar_range_is_calculation_error() {
    let (status, body) = post(
        create_router_for_test(),
        "/periods/yearly",
        json!({"year": 262142, "salary_cycle": cycle("monthly")}),
    )
    .await;

    assert_error_code(status, &body, StatusCode::INTERNAL_SERVER_ERROR, "CALCULATION_ERROR");
}

// =============================================================================
// Working Days
// =============================================================================

#[tokio::test]
async fn test_working_days_explicit_holidays() {
    let (status, body) = post(
        create_router_for_test(),
        "/working-days",
        json!({
            "start_date": "2026-02-01",
            "end_date": "2026-02-15",
            "holidays": ["2026-02-14"],
            "weekly_off_days": [0, 6]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["working_days"], 10);
}

#[tokio::test]
async fn test_working_days_configured_calendar() {
    // January 2026 has 22 weekdays; Republic Day falls on Monday the 26th.
    let (status, body) = post(
        create_router_for_test(),
        "/working-days",
        json!({"start_date": "2026-01-01", "end_date": "2026-01-31"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["working_days"], 21);
}

#[tokio::test]
async fn test_working_days_jurisdiction_filter() {
    // Ugadi (Thursday 19 March) is observed in KA only.
    let request = |jurisdiction: &str| {
        json!({
            "start_date": "2026-03-01",
            "end_date": "2026-03-31",
            "jurisdiction": jurisdiction
        })
    };

    let (_, karnataka) = post(create_router_for_test(), "/working-days", request("KA")).await;
    let (_, maharashtra) = post(create_router_for_test(), "/working-days", request("MH")).await;

    assert_eq!(karnataka["working_days"], 21);
    assert_eq!(maharashtra["working_days"], 22);
}

#[tokio::test]
async fn test_working_days_six_day_week() {
    let (status, body) = post(
        create_router_for_test(),
        "/working-days",
        json!({
            "start_date": "2026-02-01",
            "end_date": "2026-02-07",
            "holidays": [],
            "weekly_off_days": [0]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["working_days"], 6);
}

#[tokio::test]
async fn test_working_days_reversed_range_is_zero() {
    let (status, body) = post(
        create_router_for_test(),
        "/working-days",
        json!({"start_date": "2026-02-15", "end_date": "2026-02-01"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["working_days"], 0);
}

#[tokio::test]
async fn test_working_days_rejects_overlong_range() {
    let (status, body) = post(
        create_router_for_test(),
        "/working-days",
        json!({"start_date": "0001-01-01", "end_date": "9999-12-31", "holidays": []}),
    )
    .await;

    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_working_days_accepts_longest_allowed_range() {
    // 2026-01-01 to 2036-01-08 is exactly MAX_WORKING_DAYS_SPAN days inclusive.
    let (status, body) = post(
        create_router_for_test(),
        "/working-days",
        json!({
            "start_date": "2026-01-01",
            "end_date": "2036-01-08",
            "holidays": [],
            "weekly_off_days": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["working_days"], MAX_WORKING_DAYS_SPAN);
}

#[tokio::test]
async fn test_working_days_rejects_bad_off_day_index() {
    let (status, body) = post(
        create_router_for_test(),
        "/working-days",
        json!({
            "start_date": "2026-02-01",
            "end_date": "2026-02-15",
            "weekly_off_days": [0, 9]
        }),
    )
    .await;

    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}

// =============================================================================
// Pro-Rata and Overtime
// =============================================================================

#[tokio::test]
async fn test_prorate_partial_and_full() {
    let (status, half) = post(
        create_router_for_test(),
        "/prorate",
        json!({"amount": 30000, "actual_working_days": 10, "total_working_days": 20}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&half["amount"]), decimal("15000"));

    let (_, full) = post(
        create_router_for_test(),
        "/prorate",
        json!({"amount": "33333.33", "actual_working_days": 21, "total_working_days": 21}),
    )
    .await;
    assert_eq!(decimal_at(&full["amount"]), decimal("33333.33"));
}

#[tokio::test]
async fn test_prorate_zero_total_days_is_zero() {
    let (status, body) = post(
        create_router_for_test(),
        "/prorate",
        json!({"amount": 30000, "actual_working_days": 0, "total_working_days": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&body["amount"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_prorate_rejects_negative_days() {
    let (status, body) = post(
        create_router_for_test(),
        "/prorate",
        json!({"amount": 30000, "actual_working_days": 5, "total_working_days": -20}),
    )
    .await;

    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "NEGATIVE_INPUT");
    assert!(body["message"].as_str().unwrap().contains("total_working_days"));
}

#[tokio::test]
async fn test_overtime_with_configured_cycle() {
    let (status, body) = post(
        create_router_for_test(),
        "/overtime",
        json!({"base_monthly_salary": 41600, "overtime_hours": 5}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&body["hourly_rate"]), decimal("200"));
    assert_eq!(decimal_at(&body["amount"]), decimal("2000"));
    assert_eq!(body["audit_step"]["rule_id"], "overtime_pay");
}

#[tokio::test]
async fn test_overtime_zero_hours() {
    let (status, body) = post(
        create_router_for_test(),
        "/overtime",
        json!({"base_monthly_salary": 50000, "overtime_hours": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&body["amount"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_overtime_rejects_negative_hours() {
    let (status, body) = post(
        create_router_for_test(),
        "/overtime",
        json!({"base_monthly_salary": 50000, "overtime_hours": "-1.5"}),
    )
    .await;

    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "NEGATIVE_INPUT");
}

// =============================================================================
// Compensation Breakdown
// =============================================================================

#[tokio::test]
async fn test_breakdown_600000_scenario() {
    let (status, body) = post(
        create_router_for_test(),
        "/breakdown",
        json!({"annual_ctc": 600000}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&body["monthly_gross"]), decimal("50000"));
    assert_eq!(decimal_at(&body["gross_salary"]), decimal("50000"));

    let earnings = body["earnings"].as_array().unwrap();
    assert_eq!(earnings.len(), 3);
    assert_eq!(earnings[0]["name"], "basic");
    assert_eq!(decimal_at(&earnings[0]["amount"]), decimal("25000"));

    let deductions = &body["deductions"];
    assert_eq!(decimal_at(&deductions["pf_employee"]), decimal("1800"));
    assert_eq!(decimal_at(&deductions["esi_employee"]), Decimal::ZERO);
    assert_eq!(decimal_at(&deductions["professional_tax"]), decimal("200"));
    assert_eq!(decimal_at(&deductions["tds"]), decimal("951.67"));
    assert_eq!(decimal_at(&body["net_salary"]), decimal("47048.33"));
    assert_eq!(decimal_at(&body["annual_cost_to_company"]), decimal("621600"));
    assert!(body["warnings"].as_array().unwrap().is_empty());
    assert_eq!(body["audit_steps"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_breakdown_components_sum_to_gross() {
    let (status, body) = post(
        create_router_for_test(),
        "/breakdown",
        json!({
            "annual_ctc": "777777.77",
            "template": {
                "name": "uneven",
                "components": [
                    {"name": "basic", "percentage": "41.3"},
                    {"name": "hra", "percentage": "17.9"},
                    {"name": "lta", "percentage": "7.7"},
                    {"name": "special", "percentage": "33.1"}
                ]
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let sum: Decimal = body["earnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| decimal_at(&c["amount"]))
        .sum();
    assert_eq!(sum, decimal_at(&body["gross_salary"]));
}

#[tokio::test]
async fn test_breakdown_esi_applies_below_ceiling() {
    let (status, body) = post(
        create_router_for_test(),
        "/breakdown",
        json!({"annual_ctc": 240000}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Gross 20000: 0.75% and 3.25%.
    assert_eq!(decimal_at(&body["deductions"]["esi_employee"]), decimal("150"));
    assert_eq!(
        decimal_at(&body["employer_contributions"]["esi_employer"]),
        decimal("650")
    );
}

#[tokio::test]
async fn test_breakdown_rejects_invalid_template() {
    let (status, body) = post(
        create_router_for_test(),
        "/breakdown",
        json!({
            "annual_ctc": 600000,
            "template": {
                "name": "short",
                "components": [
                    {"name": "basic", "percentage": 50},
                    {"name": "hra", "percentage": 20},
                    {"name": "special", "percentage": 20}
                ]
            }
        }),
    )
    .await;

    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "INVALID_TEMPLATE");
    assert!(body["message"].as_str().unwrap().contains("90"));
}

#[tokio::test]
async fn test_breakdown_rejects_negative_ctc() {
    let (status, body) = post(
        create_router_for_test(),
        "/breakdown",
        json!({"annual_ctc": -100}),
    )
    .await;

    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "NEGATIVE_INPUT");
}

#[tokio::test]
async fn test_breakdown_negative_net_pay_is_warned_not_rejected() {
    let mut tax = default_tax();
    tax["professional_tax"] = json!(60000);

    let (status, body) = post(
        create_router_for_test(),
        "/breakdown",
        json!({"annual_ctc": 600000, "tax": tax}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(decimal_at(&body["net_salary"]) < Decimal::ZERO);
    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "NEGATIVE_NET_PAY");
}

#[tokio::test]
async fn test_breakdown_tds_disabled_override() {
    let mut tax = default_tax();
    tax["tds_enabled"] = json!(false);

    let (status, body) = post(
        create_router_for_test(),
        "/breakdown",
        json!({"annual_ctc": 2400000, "tax": tax}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&body["deductions"]["tds"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_breakdown_tds_increases_with_ctc() {
    let mut previous = Decimal::ZERO;
    for ctc in [300000, 600000, 900000, 1500000, 2500000] {
        let (status, body) = post(
            create_router_for_test(),
            "/breakdown",
            json!({"annual_ctc": ctc}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let tds = decimal_at(&body["deductions"]["tds"]);
        assert!(tds >= previous, "TDS fell at CTC {}", ctc);
        previous = tds;
    }
    assert!(previous > Decimal::ZERO);
}

// =============================================================================
// Period Pay
// =============================================================================

#[tokio::test]
async fn test_period_pay_mid_cycle_joiner() {
    // 10 of February's 20 weekdays fall on or after the 16th.
    let (status, body) = post(
        create_router_for_test(),
        "/period-pay",
        json!({
            "employee": {"id": "emp_001", "joining_date": "2026-02-16"},
            "reference_date": "2026-02-20",
            "monthly_salary": 40000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_id"], "emp_001");
    assert_eq!(body["period"]["label"], "February 2026");
    assert_eq!(body["total_working_days"], 20);
    assert_eq!(body["actual_working_days"], 10);
    assert_eq!(decimal_at(&body["amount"]), decimal("20000"));
    assert_eq!(body["audit_steps"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_period_pay_semi_monthly_halves_salary() {
    let (status, body) = post(
        create_router_for_test(),
        "/period-pay",
        json!({
            "employee": {"id": "emp_002", "joining_date": "2026-02-23"},
            "reference_date": "2026-02-20",
            "monthly_salary": 40000,
            "salary_cycle": cycle("semi_monthly")
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&body["period_salary"]), decimal("20000"));
    assert_eq!(body["total_working_days"], 10);
    assert_eq!(body["actual_working_days"], 5);
    assert_eq!(decimal_at(&body["amount"]), decimal("10000"));
}

#[tokio::test]
async fn test_period_pay_exited_before_period() {
    let (status, body) = post(
        create_router_for_test(),
        "/period-pay",
        json!({
            "employee": {
                "id": "emp_003",
                "joining_date": "2025-01-01",
                "exit_date": "2026-01-31"
            },
            "reference_date": "2026-02-20",
            "monthly_salary": 40000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["employed_range"].is_null());
    assert_eq!(decimal_at(&body["amount"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_period_pay_missing_employee_returns_400() {
    let (status, body) = post(
        create_router_for_test(),
        "/period-pay",
        json!({"reference_date": "2026-02-20", "monthly_salary": 40000}),
    )
    .await;

    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}

// =============================================================================
// Validation Endpoints
// =============================================================================

#[tokio::test]
async fn test_validate_template() {
    let (status, valid) = post(
        create_router_for_test(),
        "/validate/template",
        json!({"name": "standard", "components": [
            {"name": "basic", "percentage": 50},
            {"name": "hra", "percentage": 20},
            {"name": "special", "percentage": "29.95"}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(valid["valid"], true);

    let (status, invalid) = post(
        create_router_for_test(),
        "/validate/template",
        json!({"name": "over", "components": [
            {"name": "basic", "percentage": 60},
            {"name": "hra", "percentage": 50}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(invalid["valid"], false);
    assert_eq!(decimal_at(&invalid["total_pct"]), decimal("110"));
}

#[tokio::test]
async fn test_validate_salary_cycle_reports_every_error() {
    let mut bad_cycle = cycle("monthly");
    bad_cycle["start_day"] = json!(32);
    bad_cycle["working_days_per_month"] = json!(0);

    let (status, body) = post(create_router_for_test(), "/validate/salary-cycle", bad_cycle).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);

    let (_, ok) = post(
        create_router_for_test(),
        "/validate/salary-cycle",
        cycle("weekly"),
    )
    .await;
    assert_eq!(ok["valid"], true);
}

// =============================================================================
// Versioned Salary Cycle Configuration
// =============================================================================

#[tokio::test]
async fn test_get_salary_cycle_starts_at_version_one() {
    let (status, body) = send(create_router_for_test(), "GET", "/config/salary-cycle", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], 1);
    assert_eq!(body["author"], "system");
    assert_eq!(body["config"]["type"], "monthly");
}

#[tokio::test]
async fn test_update_salary_cycle_appends_revision_and_takes_effect() {
    let router = create_router_for_test();

    let (status, revision) = send(
        router.clone(),
        "PUT",
        "/config/salary-cycle",
        Some(json!({"author": "payroll-admin", "salary_cycle": cycle("semi_monthly")})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(revision["version"], 2);
    assert_eq!(revision["author"], "payroll-admin");

    let (_, history) = send(router.clone(), "GET", "/config/salary-cycle/history", None).await;
    let revisions = history.as_array().unwrap();
    assert_eq!(revisions.len(), 2);
    assert_eq!(revisions[0]["config"]["type"], "monthly");
    assert_eq!(revisions[1]["config"]["type"], "semi_monthly");

    // Requests without an inline cycle now use the new revision.
    let (_, period) = post(router, "/periods/resolve", json!({"date": "2026-02-20"})).await;
    assert_eq!(period["start_date"], "2026-02-16");
    assert_eq!(period["end_date"], "2026-02-28");
}

#[tokio::test]
async fn test_update_salary_cycle_rejects_invalid_config() {
    let router = create_router_for_test();
    let mut bad_cycle = cycle("monthly");
    bad_cycle["start_day"] = json!(20);
    bad_cycle["end_day"] = json!(10);

    let (status, body) = send(
        router.clone(),
        "PUT",
        "/config/salary-cycle",
        Some(json!({"author": "payroll-admin", "salary_cycle": bad_cycle})),
    )
    .await;
    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "INVALID_CONFIG");

    let (_, history) = send(router, "GET", "/config/salary-cycle/history", None).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_salary_cycle_requires_author() {
    let (status, body) = send(
        create_router_for_test(),
        "PUT",
        "/config/salary-cycle",
        Some(json!({"author": "  ", "salary_cycle": cycle("weekly")})),
    )
    .await;

    assert_error_code(status, &body, StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/breakdown")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"annual_ctc\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/breakdown")
                .body(Body::from(json!({"annual_ctc": 600000}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}
