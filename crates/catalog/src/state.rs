use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{SystemMetrics, run_metrics_collector},
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl AppState {
    /// Wires the Postgres-backed container and starts the process metrics collector.
    pub fn new(pool: ConnectionPool) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(pool, &mut registry);

        let state = Self::from_parts(di_container, registry);

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        state
    }

    pub fn from_parts(di_container: DependenciesInject, mut registry: Registry) -> Self {
        let system_metrics = Arc::new(SystemMetrics::new());
        system_metrics.register(&mut registry);

        Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            system_metrics,
        }
    }
}
