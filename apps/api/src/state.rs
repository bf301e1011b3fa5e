use crate::config::Config;
use crate::matching::factors::MatchWeights;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Kept for handlers that need runtime settings; unused by the match routes today.
    #[allow(dead_code)]
    pub config: Config,
    /// Factor weights used by the match endpoints. Fixed at startup.
    pub weights: MatchWeights,
}
