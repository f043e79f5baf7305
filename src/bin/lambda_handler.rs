//! AWS Lambda handler for the revenue calculator
//!
//! Reads the `referrals`, `newProjects` and `existingProjects` query parameters,
//! runs the projection and returns either the JSON schedule or the rendered page.
//!
//! Supports Lambda Function URLs for direct HTTP access.
//! Set REVENUE_ASSUMPTIONS_PATH to load assumptions from a CSV file.

use affiliate_revenue::{
    page::render_page, ChartSeries, MonthRecord, ProjectionInputs, ScenarioRunner,
};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use log::{error, info};
use std::sync::Arc;

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message });
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body.to_string()))?)
}

fn json_response(records: &[MonthRecord]) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(records)?))?)
}

fn html_response(html: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::Text(html))?)
}

/// Whether the caller asked for the page rather than the data
fn wants_html(event: &Request) -> bool {
    let query = event.query_string_parameters_ref();
    if let Some(format) = query.and_then(|q| q.first("format")) {
        return format.eq_ignore_ascii_case("html");
    }

    event
        .headers()
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("text/html"))
        .unwrap_or(false)
}

/// Lambda handler function
async fn handler(runner: &ScenarioRunner, event: Request) -> Result<Response<Body>, Error> {
    match event.method().as_str() {
        // Handle CORS preflight
        "OPTIONS" => {
            return Ok(Response::builder()
                .status(200)
                .header("Access-Control-Allow-Origin", "*")
                .header("Access-Control-Allow-Methods", "GET, OPTIONS")
                .header("Access-Control-Allow-Headers", "Content-Type")
                .body(Body::Empty)?);
        }
        "GET" => {}
        other => return error_response(405, &format!("Method {} not allowed", other)),
    }

    let query = event.query_string_parameters_ref();
    let inputs = ProjectionInputs::from_query(|name| query.and_then(|q| q.first(name)));
    info!(
        "Projection request: referrals={}, newProjects={}, existingProjects={}",
        inputs.referred_customers_per_month,
        inputs.avg_new_projects_per_month,
        inputs.avg_existing_projects,
    );

    let result = runner.run(&inputs);

    if wants_html(&event) {
        let today = chrono::Local::now().date_naive();
        let series = ChartSeries::from_records(&result.records, today);
        return match render_page(&inputs, &series) {
            Ok(html) => html_response(html),
            Err(e) => {
                error!("Failed to render calculator page: {}", e);
                error_response(500, "Failed to render page")
            }
        };
    }

    json_response(&result.records)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let runner = match ScenarioRunner::from_env() {
        Ok(runner) => Arc::new(runner),
        Err(e) => {
            error!("Failed to load revenue assumptions: {}", e);
            return Err(e.into());
        }
    };
    info!("Revenue assumptions: {:?}", runner.assumptions());

    run(service_fn(move |event: Request| {
        let runner = Arc::clone(&runner);
        async move { handler(&runner, event).await }
    }))
    .await
}
