//! diabetes-risk-server: HTTP boundary for the risk scoring pipeline.
//!
//! Thin plumbing around `diabetes-risk-core`: an axum router exposing the
//! prediction endpoint, a static HTML form, and a liveness probe. All
//! scoring semantics live in the core crate; this crate owns only
//! presentation (response key names, the human-readable label, 4-decimal
//! rounding) and error→status mapping.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
