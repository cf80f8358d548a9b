use crate::config::SiteContent;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use newscat_core::{PredictionError, PredictionRequest};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

// ============================================================================
// Health endpoints
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Page content
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SiteResponse {
    pub title: String,
    pub tagline: String,
    pub about: String,
    pub logo_url: Option<String>,
    pub prediction_image_url: Option<String>,
    pub eda_intro: String,
    pub eda_charts: Vec<ChartResponse>,
    pub default_text: String,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub url: String,
    pub caption: String,
}

pub async fn site(State(state): State<AppState>) -> impl IntoResponse {
    let site: &SiteContent = &state.config.site;
    let images_enabled = state.config.assets_dir.is_some();
    let asset_url = |file: &str| format!("/assets/{}", file.trim_start_matches('/'));

    // Without an assets directory there is nothing to serve images from.
    let eda_charts = if images_enabled {
        site.eda_charts
            .iter()
            .map(|chart| ChartResponse {
                url: asset_url(&chart.file),
                caption: chart.caption.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    Json(SiteResponse {
        title: site.title.clone(),
        tagline: site.tagline.clone(),
        about: site.about.clone(),
        logo_url: site.logo.as_deref().filter(|_| images_enabled).map(asset_url),
        prediction_image_url: site
            .prediction_image
            .as_deref()
            .filter(|_| images_enabled)
            .map(asset_url),
        eda_intro: site.eda_intro.clone(),
        eda_charts,
        default_text: site.default_text.clone(),
    })
}

// ============================================================================
// Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelSummary>,
    pub labels: BTreeMap<usize, String>,
}

pub async fn list_models(State(state): State<AppState>) -> impl IntoResponse {
    let models = state
        .dispatcher
        .registry()
        .iter()
        .map(|(name, classifier)| ModelSummary {
            name: name.to_string(),
            kind: classifier.kind().to_string(),
            description: state.descriptions.get(name).cloned(),
        })
        .collect();

    Json(ModelsResponse {
        models,
        labels: state.dispatcher.labels().as_map().clone(),
    })
}

// ============================================================================
// Classification
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub category: String,
    pub class_index: usize,
    pub model: String,
    pub latency_us: u64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

fn error_response(status: StatusCode, error: &'static str, message: String) -> Response {
    (status, Json(ErrorResponse { error, message })).into_response()
}

/// HTTP status for each failure kind
pub fn status_for(err: &PredictionError) -> StatusCode {
    match err {
        PredictionError::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
        PredictionError::UnknownModel { .. } => StatusCode::NOT_FOUND,
        PredictionError::TransformFailure { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        PredictionError::ClassifierFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message shown to the user for each failure kind
pub fn user_message(err: &PredictionError, available: &[String]) -> String {
    match err {
        PredictionError::EmptyInput => "Please enter text for classification".to_string(),
        PredictionError::UnknownModel { model } => format!(
            "Model '{}' is not available. Choose one of: {}",
            model,
            available.join(", ")
        ),
        PredictionError::TransformFailure { .. } | PredictionError::ClassifierFailure { .. } => {
            format!("An error occurred during classification: {}", err)
        }
    }
}

pub async fn classify(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Rejected classify body: {}", rejection.body_text());
            return error_response(rejection.status(), "invalid_request", rejection.body_text());
        }
    };

    let started = Instant::now();
    let dispatcher = Arc::clone(&state.dispatcher);
    let model = request.model_name.clone();

    // Model evaluation is CPU-bound; keep it off the async workers.
    let job = tokio::task::spawn_blocking(move || dispatcher.classify(&request));

    let result = match tokio::time::timeout(state.request_timeout(), job).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            error!("Classification task for model '{}' failed: {}", model, e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "An error occurred during classification".to_string(),
            );
        }
        Err(_) => {
            state.stats.record_timeout();
            warn!("Classification with model '{}' timed out", model);
            return error_response(
                StatusCode::GATEWAY_TIMEOUT,
                "timeout",
                "Classification took too long, please try again".to_string(),
            );
        }
    };

    let latency_us = started.elapsed().as_micros() as u64;
    state.stats.record(&result, latency_us);

    match result {
        Ok(prediction) => {
            debug!(
                "Classified with '{}' as {} in {}us",
                prediction.model, prediction.category, latency_us
            );
            let message = format!("Text Categorized as: {}", prediction.category);
            (
                StatusCode::OK,
                Json(ClassifyResponse {
                    category: prediction.category,
                    class_index: prediction.class_index,
                    model: prediction.model,
                    latency_us,
                    message,
                }),
            )
                .into_response()
        }
        Err(err) => {
            debug!("Classification rejected ({}): {}", err.kind(), err);
            error_response(
                status_for(&err),
                err.kind(),
                user_message(&err, state.dispatcher.model_names()),
            )
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.stats.snapshot())
}
