//! Shared application state for the HTTP boundary.

use diabetes_risk_core::config::ServerConfig;
use diabetes_risk_core::RiskScorer;

/// State handed to every handler.
///
/// Cloned per request by axum; cheap because the scorer keeps its loaded
/// artifacts behind an `Arc`. Nothing in here is mutable after startup, so
/// concurrent requests need no coordination.
#[derive(Debug, Clone)]
pub struct AppState {
    pub scorer: RiskScorer,
    pub service_name: String,
    pub service_version: String,
}

impl AppState {
    pub fn new(scorer: RiskScorer, server: &ServerConfig) -> Self {
        Self {
            scorer,
            service_name: server.name.clone(),
            service_version: server.version.clone(),
        }
    }
}
