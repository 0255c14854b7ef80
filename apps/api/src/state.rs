use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::matching::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only for the life of the process.
    pub catalog: Arc<JobCatalog>,
    /// Pluggable ranking backend. Default: SkillOverlapMatcher.
    pub matcher: Arc<dyn JobMatcher>,
}
