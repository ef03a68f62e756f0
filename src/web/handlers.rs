//! HTTP request handlers.

use super::AppState;
use crate::aggregate::{
    build_chart_axis, build_chart_series, build_history_timeline, compute_latency_stats, summarize,
    uptime_percent, ChartAxis, ChartPoint, LatencyStats, ProbeResult, Resource, SummaryOptions,
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

/// Optional per-request output sizes.
#[derive(Debug, Default, Deserialize)]
pub struct SizeQuery {
    pub width: Option<usize>,
    pub window: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesRequest {
    pub statuses: Vec<ProbeResult>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub resource: Resource,
    pub statuses: Vec<ProbeResult>,
}

fn resolve_options(state: &AppState, query: &SizeQuery) -> Result<SummaryOptions, String> {
    let defaults = state.config.summary_options();
    let options = SummaryOptions {
        history_width: query.width.unwrap_or(defaults.history_width),
        chart_window: query.window.unwrap_or(defaults.chart_window),
    };
    validate_sizes(&options, state.config.max_points)?;
    Ok(options)
}

/// Reject output sizes above the configured limit.
pub fn validate_sizes(options: &SummaryOptions, max_points: usize) -> Result<(), String> {
    if options.history_width > max_points {
        return Err(format!(
            "history width {} exceeds limit {}",
            options.history_width, max_points
        ));
    }
    if options.chart_window > max_points {
        return Err(format!(
            "chart window {} exceeds limit {}",
            options.chart_window, max_points
        ));
    }
    Ok(())
}

// ============================================================================
// API: Aggregation
// ============================================================================

pub async fn handle_summary(
    State(state): State<AppState>,
    Query(query): Query<SizeQuery>,
    Json(req): Json<SummaryRequest>,
) -> impl IntoResponse {
    let options = match resolve_options(&state, &query) {
        Ok(o) => o,
        Err(e) => return (StatusCode::BAD_REQUEST, e).into_response(),
    };

    let summary = summarize(req.resource, &req.statuses, Utc::now(), options);
    Json(summary).into_response()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub stats: LatencyStats,
    pub uptime: f64,
    pub total_checks: usize,
}

pub async fn handle_stats(Json(req): Json<SeriesRequest>) -> impl IntoResponse {
    Json(StatsResponse {
        stats: compute_latency_stats(&req.statuses),
        uptime: uptime_percent(&req.statuses),
        total_checks: req.statuses.len(),
    })
}

pub async fn handle_history(
    State(state): State<AppState>,
    Query(query): Query<SizeQuery>,
    Json(req): Json<SeriesRequest>,
) -> impl IntoResponse {
    match resolve_options(&state, &query) {
        Ok(o) => Json(build_history_timeline(&req.statuses, o.history_width)).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e).into_response(),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartResponse {
    pub axis: ChartAxis,
    pub points: Vec<ChartPoint>,
}

pub async fn handle_chart(
    State(state): State<AppState>,
    Query(query): Query<SizeQuery>,
    Json(req): Json<SeriesRequest>,
) -> impl IntoResponse {
    let options = match resolve_options(&state, &query) {
        Ok(o) => o,
        Err(e) => return (StatusCode::BAD_REQUEST, e).into_response(),
    };

    Json(ChartResponse {
        axis: build_chart_axis(&req.statuses),
        points: build_chart_series(&req.statuses, options.chart_window),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{HistorySlot, LatencyClass};
    use crate::config::ServerConfig;
    use axum::body::to_bytes;
    use axum::response::Response;
    use chrono::{Duration, TimeZone};

    fn state() -> AppState {
        AppState {
            config: ServerConfig {
                max_points: 100,
                ..Default::default()
            },
        }
    }

    fn statuses() -> Vec<ProbeResult> {
        let base = Utc.with_ymd_and_hms(2026, 1, 4, 9, 0, 0).unwrap();
        vec![
            ProbeResult::new(base + Duration::minutes(2), 500, 0.300),
            ProbeResult::new(base, 200, 0.100),
            ProbeResult::new(base + Duration::minutes(1), 200, 0.200),
        ]
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: Response) -> T {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let resp = handle_stats(Json(SeriesRequest { statuses: statuses() }))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: StatsResponse = body_json(resp).await;
        assert_eq!(body.total_checks, 3);
        assert_eq!(body.uptime, 66.7);
        assert_eq!(body.stats.average, 200);
    }

    #[tokio::test]
    async fn test_history_uses_configured_width() {
        let resp = handle_history(
            State(state()),
            Query(SizeQuery::default()),
            Json(SeriesRequest { statuses: statuses() }),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let slots: Vec<HistorySlot> = body_json(resp).await;
        assert_eq!(slots.len(), 48);
        assert_eq!(slots.iter().filter(|s| s.is_unknown()).count(), 45);
        assert!(matches!(slots[47], HistorySlot::Failure { .. }));
    }

    #[tokio::test]
    async fn test_oversized_request_rejected() {
        let resp = handle_chart(
            State(state()),
            Query(SizeQuery { width: None, window: Some(101) }),
            Json(SeriesRequest { statuses: statuses() }),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chart_endpoint() {
        let resp = handle_chart(
            State(state()),
            Query(SizeQuery { width: None, window: Some(2) }),
            Json(SeriesRequest { statuses: statuses() }),
        )
        .await
        .into_response();

        let body: ChartResponse = body_json(resp).await;
        assert_eq!(body.axis.max_ms, 300);
        assert_eq!(body.points.len(), 2);
        assert_eq!(body.points[1].classification, LatencyClass::Medium);
    }

    #[test]
    fn test_validate_sizes() {
        let ok = SummaryOptions { history_width: 48, chart_window: 20 };
        assert!(validate_sizes(&ok, 48).is_ok());

        let wide = SummaryOptions { history_width: 49, chart_window: 20 };
        assert!(validate_sizes(&wide, 48).is_err());
    }

    #[test]
    fn test_summary_request_parses_api_payload() {
        let payload = r#"{
            "resource": {"resource_id": 1, "url": "https://example.com", "state": "UP", "updated_at": "2026-01-04T09:00:00Z"},
            "statuses": [{"created_at": "2026-01-04T09:00:00Z", "status_code": 200, "response_time": 0.12}]
        }"#;
        let req: SummaryRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(req.statuses.len(), 1);
        assert_eq!(req.resource.resource_id, 1);
    }

    #[test]
    fn test_summary_endpoint() {
        let req = SummaryRequest {
            resource: Resource {
                resource_id: 1,
                url: "https://example.com".to_string(),
                state: crate::aggregate::ResourceState::Up,
                updated_at: Utc::now(),
            },
            statuses: statuses(),
        };
        let resp = tokio_test::block_on(handle_summary(
            State(state()),
            Query(SizeQuery { width: Some(10), window: None }),
            Json(req),
        ))
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = tokio_test::block_on(body_json(resp));
        assert_eq!(body["history"].as_array().map(Vec::len), Some(10));
        assert_eq!(body["current_status_code"], 500);
        assert_eq!(body["updated"], "just now");
    }
}
