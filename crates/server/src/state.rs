use crate::config::ServerConfig;
use crate::metrics::ProcessMetrics;
use features::FeatureConfig;
use std::sync::Arc;

/// Pluggable health predicate consulted by the liveness endpoint.
///
/// The shipped service has no external resources to probe, so the default
/// implementation always reports healthy. Deployments that do depend on a
/// resource (a model file, a mounted volume) install their own check.
pub trait ResourceCheck: Send + Sync {
    fn healthy(&self) -> bool;
}

/// Default health predicate: always healthy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysHealthy;

impl ResourceCheck for AlwaysHealthy {
    fn healthy(&self) -> bool {
        true
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Feature-extraction parameters, fixed for the process lifetime so all
    /// responses stay mutually comparable
    pub features: FeatureConfig,

    /// Process-wide request metrics (shared across requests)
    pub metrics: ProcessMetrics,

    /// Health predicate for `/is_alive`
    pub resource_check: Arc<dyn ResourceCheck>,
}

impl AppState {
    /// Create new application state with default feature parameters
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            features: FeatureConfig::default(),
            metrics: ProcessMetrics::new(),
            resource_check: Arc::new(AlwaysHealthy),
        }
    }

    /// Replace the health predicate
    pub fn with_resource_check(mut self, check: Arc<dyn ResourceCheck>) -> Self {
        self.resource_check = check;
        self
    }
}
