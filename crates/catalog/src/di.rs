use crate::{
    abstract_trait::product::{DynProductQueryRepository, DynProductQueryService},
    repository::ProductQueryRepository,
    service::ProductQueryService,
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query_service: DynProductQueryService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query_service", &"DynProductQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, registry: &mut Registry) -> Self {
        let repository: DynProductQueryRepository = Arc::new(ProductQueryRepository::new(pool));

        Self::with_repository(repository, registry)
    }

    pub fn with_repository(repository: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let product_query_service: DynProductQueryService =
            Arc::new(ProductQueryService::new(repository, registry));

        Self {
            product_query_service,
        }
    }
}
