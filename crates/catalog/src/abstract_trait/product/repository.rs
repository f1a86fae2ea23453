use crate::{
    model::product::{ProductCard, ProductDetails},
    query::ProductQuery,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// One page of cards for an already validated query.
    async fn find_cards(&self, query: &ProductQuery) -> Result<Vec<ProductCard>, RepositoryError>;
    async fn find_details(&self, product_id: i64)
    -> Result<Option<ProductDetails>, RepositoryError>;
}
