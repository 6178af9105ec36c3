//! Route handlers for the risk service

use actix_web::{web, HttpResponse};
use chrono::Local;
use serde::Serialize;
use serde_json::{json, Value};

use super::error::ApiError;
use crate::detection::{RiskEvaluator, RiskFactorCatalog, StatusThresholds};
use crate::models::{LoginEvent, RiskAssessment};

pub const SERVICE_NAME: &str = "Smart Auth Hub - Anomaly Detection Service";
/// Reported by the training placeholder
pub const MODEL_VERSION: &str = "1.0.0";
const PLACEHOLDER_ACCURACY: f64 = 0.85;

#[derive(Serialize)]
struct AnalysisResponse {
    success: bool,
    analysis: RiskAssessment,
}

#[derive(Serialize)]
struct RiskFactorsResponse {
    success: bool,
    risk_factors: RiskFactorCatalog,
    thresholds: StatusThresholds,
}

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health_check))
        .route("/analyze-login", web::post().to(analyze_login))
        .route("/train-model", web::post().to(train_model))
        .route("/get-risk-factors", web::get().to(get_risk_factors));
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Local::now().to_rfc3339(),
    }))
}

async fn analyze_login(
    evaluator: web::Data<RiskEvaluator>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let value = parse_body(&body)?;
    if is_empty_payload(&value) {
        return Err(ApiError::NoData);
    }

    let event: LoginEvent =
        serde_json::from_value(value).map_err(|e| ApiError::Analysis(e.to_string()))?;
    let analysis = evaluator.evaluate(&event);

    if analysis.is_suspicious() {
        log::warn!(
            "Suspicious login scored {}: {}",
            analysis.risk_score,
            analysis
                .factors
                .iter()
                .map(|f| f.description.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    Ok(HttpResponse::Ok().json(AnalysisResponse {
        success: true,
        analysis,
    }))
}

/// Accepts training samples for API compatibility; no model is fitted.
async fn train_model(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let value = parse_body(&body).map_err(|e| ApiError::Training(e.to_string()))?;
    let request = match value {
        Value::Object(map) => map,
        Value::Null => return Err(ApiError::Training(ApiError::NoData.to_string())),
        other => {
            return Err(ApiError::Training(format!(
                "expected a JSON object, got {}",
                json_type(&other)
            )))
        }
    };

    let samples = match request.get("training_data") {
        None | Some(Value::Null) => 0,
        Some(Value::Array(items)) => items.len(),
        Some(other) => {
            return Err(ApiError::Training(format!(
                "training_data must be a list, got {}",
                json_type(other)
            )))
        }
    };
    log::info!("Received {} training samples", samples);

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Model trained on {} samples", samples),
        "model_version": MODEL_VERSION,
        "accuracy": PLACEHOLDER_ACCURACY,
    })))
}

async fn get_risk_factors() -> HttpResponse {
    HttpResponse::Ok().json(RiskFactorsResponse {
        success: true,
        risk_factors: RiskFactorCatalog,
        thresholds: StatusThresholds::default(),
    })
}

fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::NoData);
    }
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// Null, false, zero, and empty strings, arrays or objects carry no data
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
