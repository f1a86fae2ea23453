use crate::{
    abstract_trait::product::ProductQueryRepositoryTrait,
    model::product::{ProductCard, ProductDetails, ProductInforms, ProductSizeStock},
    query::ProductQuery,
};
use async_trait::async_trait;
use shared::{
    config::{ConnectionPool, begin_read_only},
    errors::RepositoryError,
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_cards(&self, query: &ProductQuery) -> Result<Vec<ProductCard>, RepositoryError> {
        info!(
            "🔍 Fetching product cards | offset: {}, limit: {}",
            query.window.offset, query.window.limit
        );

        let mut tx = begin_read_only(&self.db).await.map_err(|e| {
            error!("❌ Failed to open read-only transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        let mut builder = query.to_sql();

        let cards = builder
            .build_query_as::<ProductCard>()
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product cards: {:?}", e);
                RepositoryError::from(e)
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Fetched {} product cards", cards.len());

        Ok(cards)
    }

    async fn find_details(
        &self,
        product_id: i64,
    ) -> Result<Option<ProductDetails>, RepositoryError> {
        info!("🆔 Fetching product details for id: {product_id}");

        let mut tx = begin_read_only(&self.db).await.map_err(|e| {
            error!("❌ Failed to open read-only transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        let informs = sqlx::query_as::<_, ProductInforms>(
            r#"
            SELECT
                p.product_id,
                p.name,
                pi.product_image_id AS main_image_id,
                pi.saved_name AS main_image,
                p.price,
                p.person_category,
                p.season_category,
                p.product_category,
                p.like_count,
                p.created_at,
                p.description,
                p.total_stock
            FROM products p
            INNER JOIN product_images pi
                ON pi.product_id = p.product_id AND pi.image_category = 'MAIN'
            WHERE p.product_id = $1 AND p.is_deleted = FALSE
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {product_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        let Some(informs) = informs else {
            info!("⚠️ Product {product_id} not found");
            return Ok(None);
        };

        let side_images = sqlx::query_scalar::<_, String>(
            r#"
            SELECT saved_name
            FROM product_images
            WHERE product_id = $1 AND image_category = 'SIDE'
            ORDER BY product_image_id
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch side images for {product_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        let size_stocks = sqlx::query_as::<_, ProductSizeStock>(
            r#"
            SELECT product_detail_id, shoes_size, size_stock
            FROM product_details
            WHERE product_id = $1
            ORDER BY shoes_size
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch size stocks for {product_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Product {product_id} assembled with {} side images and {} sizes",
            side_images.len(),
            size_stocks.len()
        );

        Ok(Some(ProductDetails {
            informs,
            side_images,
            size_stocks,
        }))
    }
}
