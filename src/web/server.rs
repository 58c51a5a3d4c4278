use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::PostingCatalog;
use crate::cli::{load_catalog, ServeArgs};
use crate::collector::{ProfileForm, ProfileInput};
use crate::insight::InsightClient;
use crate::matching::engine::{MatchingEngine, ScoredPosting};
use crate::matching::filter::{ResultFilter, LOCATION_PRESETS};
use crate::utils::validation::{validate_filter, validate_profile_input, validate_result_count};

/// Maximum request body size; profiles and result lists are small
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Per-request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of requests handled at once
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Shared application state
pub struct AppState {
    pub catalog: PostingCatalog,
    /// `None` when no insight endpoint is configured
    pub insight: Option<InsightClient>,
}

/// Enhanced error response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Deserialize)]
struct MatchRequest {
    profile: ProfileInput,
    #[serde(default)]
    filters: ResultFilter,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchResponse<'a> {
    results: &'a [ScoredPosting],
    visible: Vec<&'a ScoredPosting>,
    total: usize,
    visible_count: usize,
    insight: Option<String>,
    processing_time_ms: u64,
}

#[derive(Deserialize)]
struct FilterRequest {
    results: Vec<ScoredPosting>,
    #[serde(default)]
    filters: ResultFilter,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterResponse<'a> {
    visible: Vec<&'a ScoredPosting>,
    total: usize,
    visible_count: usize,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

fn bad_request(error_type: &str, message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(create_safe_error_response(error_type, message, None)),
    )
        .into_response()
}

fn rejected_body(rejection: &JsonRejection) -> Response {
    tracing::warn!("Rejected request body: {rejection}");
    bad_request("invalid_request", "Request body is not valid JSON for this endpoint")
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Load the catalog and insight client named by the serve flags
///
/// A bad insight configuration is logged and leaves the insight disabled.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn build_state(args: &ServeArgs) -> anyhow::Result<Arc<AppState>> {
    let catalog = load_catalog(args.catalog.as_ref())?;
    let insight = InsightClient::from_config_or_warn(&args.insight.to_config());
    if let Some(client) = &insight {
        tracing::info!("Insight service enabled at {}", client.endpoint());
    }
    Ok(Arc::new(AppState { catalog, insight }))
}

/// Routes, security headers and resource limits, without per-IP rate limiting.
///
/// Rate limiting keys on the peer address, which only exists when the app is
/// served with connect info; see [`create_router`].
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/match", post(match_handler))
        .route("/api/filter", post(filter_handler))
        .route("/api/catalog", get(catalog_handler))
        .route("/api/health", get(health_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-xss-protection"),
                    HeaderValue::from_static("1; mode=block"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("strict-transport-security"),
                    HeaderValue::from_static("max-age=31536000; includeSubDomains"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(REQUEST_TIMEOUT_SECS),
                ))
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
}

/// Create the full application router, including per-IP rate limiting.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(state: Arc<AppState>) -> anyhow::Result<Router> {
    // 10 requests per second per IP, bursts of 50
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(50)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    Ok(create_app(state).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    }))
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let state = build_state(&args)?;
    tracing::debug!(postings = state.catalog.len(), "Catalog loaded");
    let app = create_router(state)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting internship-navigator web server at http://{addr}");

    if args.open {
        if let Err(e) = open::that(format!("http://{addr}")) {
            tracing::warn!("Could not open browser: {e}");
        }
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<String> {
    Html(render_index())
}

/// The form page with the location filter presets filled in
fn render_index() -> String {
    let options: Vec<String> = LOCATION_PRESETS
        .iter()
        .map(|preset| {
            format!(
                "          <option value=\"{preset}\">{}</option>",
                title_case(preset)
            )
        })
        .collect();
    include_str!("templates/index.html").replace("{{LOCATION_OPTIONS}}", &options.join("\n"))
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate a profile, rank the catalog, and apply the visibility filters
async fn match_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Response {
    let start_time = Instant::now();

    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejected_body(&rejection),
    };

    if let Err(e) = validate_profile_input(&request.profile) {
        return bad_request("validation_failed", &e.to_string());
    }
    if let Err(e) = validate_filter(&request.filters) {
        return bad_request("validation_failed", &e.to_string());
    }
    let profile = match ProfileForm::from_input(&request.profile).and_then(|form| form.submit()) {
        Ok(profile) => profile,
        Err(e) => return bad_request("validation_failed", &e.to_string()),
    };

    let report = MatchingEngine::new(&state.catalog).find_matches(&profile);
    let visible = request.filters.apply(&report.results);

    let insight = match &state.insight {
        Some(client) => client.fetch_best_effort(&profile, &state.catalog).await,
        None => None,
    };

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time_ms = start_time.elapsed().as_millis() as u64;

    tracing::debug!(
        total = report.results.len(),
        visible = visible.len(),
        processing_time_ms,
        "Match request served"
    );

    Json(MatchResponse {
        results: &report.results,
        visible_count: visible.len(),
        visible,
        total: report.results.len(),
        insight,
        processing_time_ms,
    })
    .into_response()
}

/// Re-apply visibility filters to an already ranked list without re-scoring
async fn filter_handler(payload: Result<Json<FilterRequest>, JsonRejection>) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejected_body(&rejection),
    };

    if let Err(e) = validate_result_count(request.results.len()) {
        return bad_request("validation_failed", &e.to_string());
    }
    if let Err(e) = validate_filter(&request.filters) {
        return bad_request("validation_failed", &e.to_string());
    }

    let visible = request.filters.apply(&request.results);
    Json(FilterResponse {
        visible_count: visible.len(),
        visible,
        total: request.results.len(),
    })
    .into_response()
}

async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "count": state.catalog.len(),
        "postings": state.catalog.postings,
    }))
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "postings": state.catalog.len(),
    }))
}
