//! HTTP routes: the prediction endpoint, the HTML form, and liveness.

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use diabetes_risk_core::{RiskFactors, RiskLabel};

use crate::error::ApiError;
use crate::state::AppState;

/// Single-page form POSTing to `/predict`, served at `/`.
const INDEX_HTML: &str = include_str!("../static/index.html");

/// Wire shape of a successful prediction.
///
/// `result` carries the human-readable label and `probability` is rounded
/// to 4 decimals. Both are presentation choices owned by this boundary;
/// the core pipeline neither rounds nor names classes.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub result: &'static str,
    pub probability: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: String,
    pub version: String,
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: state.service_name,
        version: state.service_version,
    })
}

/// Score one request.
///
/// The body is taken as a loose JSON object so that field-level validation
/// (which field is missing, which is non-numeric) happens in the core and
/// produces precise 422 messages, instead of an opaque deserialization
/// rejection.
async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<PredictResponse>, ApiError> {
    let factors = RiskFactors::from_value(&payload)?;
    let prediction = state.scorer.predict(&factors)?;

    debug!(
        label = prediction.label.as_u8(),
        probability = prediction.probability,
        "served prediction"
    );

    let result = match prediction.label {
        RiskLabel::Positive => "Diabetes",
        RiskLabel::Negative => "No Diabetes",
    };

    Ok(Json(PredictResponse {
        result,
        probability: round4(prediction.probability),
    }))
}

/// Round to 4 decimals for display parity with the original UI; the
/// pipeline itself never rounds.
fn round4(p: f64) -> f64 {
    (p * 10_000.0).round() / 10_000.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use diabetes_risk_core::config::ServerConfig;
    use diabetes_risk_core::{
        LogisticModel, ModelArtifacts, RiskScorer, StandardScaler, FEATURE_COUNT,
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    fn toy_router() -> Router {
        toy_router_with_scale([1.0; FEATURE_COUNT])
    }

    fn toy_router_with_scale(scale: [f64; FEATURE_COUNT]) -> Router {
        let scorer = RiskScorer::new(ModelArtifacts::from_parts(
            StandardScaler::new([0.0; FEATURE_COUNT], scale),
            LogisticModel::new([0.1; FEATURE_COUNT], -0.5),
        ));
        build_router(AppState::new(scorer, &ServerConfig::default()))
    }

    fn full_payload() -> Value {
        json!({
            "pregnancies": 0,
            "glucose": 0,
            "blood_pressure": 0,
            "skin_thickness": 0,
            "insulin": 0,
            "bmi": 0,
            "diabetes_pedigree": 0,
            "age": 0
        })
    }

    fn predict_request(payload: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_the_form() {
        let response = toy_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Diabetes Risk Check"));
        assert!(page.contains("/predict"));
    }

    #[tokio::test]
    async fn test_predict_negative_with_rounded_probability() {
        // All zeros against the toy parameters: logit = -0.5,
        // probability ≈ 0.37754, rounded to 0.3775 on the wire.
        let response = toy_router()
            .oneshot(predict_request(&full_payload()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["result"], "No Diabetes");
        assert_eq!(body["probability"], 0.3775);
    }

    #[tokio::test]
    async fn test_predict_positive_label() {
        let payload = json!({
            "pregnancies": 1, "glucose": 120, "blood_pressure": 70,
            "skin_thickness": 20, "insulin": 80, "bmi": 25.0,
            "diabetes_pedigree": 0.5, "age": 30
        });

        let response = toy_router().oneshot(predict_request(&payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["result"], "Diabetes");
        assert_eq!(body["probability"], 1.0);
    }

    #[tokio::test]
    async fn test_missing_field_is_422_naming_the_field() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("glucose");

        let response = toy_router().oneshot(predict_request(&payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("glucose"));
    }

    #[tokio::test]
    async fn test_non_numeric_field_is_422() {
        let mut payload = full_payload();
        payload["bmi"] = json!("not-a-number");

        let response = toy_router().oneshot(predict_request(&payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("bmi"));
    }

    #[tokio::test]
    async fn test_degenerate_artifacts_are_500() {
        let mut scale = [1.0; FEATURE_COUNT];
        scale[2] = 0.0;

        let response = toy_router_with_scale(scale)
            .oneshot(predict_request(&full_payload()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_malformed_json_body_is_a_client_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = toy_router().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_health_reports_service_identity() {
        let response = toy_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["name"], "diabetes-risk");
    }
}
