#![allow(dead_code)]

use async_trait::async_trait;
use catalog::{
    abstract_trait::product::ProductQueryRepositoryTrait,
    domain::category::{PersonCategory, ProductCategory, SeasonCategory},
    model::product::{ProductCard, ProductDetails, ProductInforms, ProductSizeStock, Product},
    query::ProductQuery,
};
use chrono::{NaiveDate, NaiveDateTime};
use shared::errors::RepositoryError;
use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

pub fn created(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid fixture date")
}

pub struct ProductFixture {
    pub product: Product,
    pub main_image: Option<String>,
    pub side_images: Vec<String>,
    pub size_stocks: Vec<(i32, i32)>,
}

pub fn product(
    product_id: i64,
    price: i64,
    season: SeasonCategory,
    person: PersonCategory,
    category: ProductCategory,
    like_count: i64,
    sales_volume: i64,
) -> ProductFixture {
    ProductFixture {
        product: Product {
            product_id,
            name: format!("Shoe {product_id}"),
            price,
            season_category: season,
            person_category: person,
            product_category: category,
            like_count,
            sales_volume,
            description: Some(format!("Description of shoe {product_id}")),
            total_stock: 10,
            is_deleted: false,
            created_at: created(product_id as u32),
        },
        main_image: Some(format!("main-{product_id}.png")),
        side_images: Vec::new(),
        size_stocks: Vec::new(),
    }
}

impl ProductFixture {
    pub fn deleted(mut self) -> Self {
        self.product.is_deleted = true;
        self
    }

    pub fn without_main_image(mut self) -> Self {
        self.main_image = None;
        self
    }

    pub fn named(mut self, name: &str) -> Self {
        self.product.name = name.to_string();
        self
    }

    pub fn with_side_images(mut self, images: &[&str]) -> Self {
        self.side_images = images.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_sizes(mut self, sizes: &[(i32, i32)]) -> Self {
        self.size_stocks = sizes.to_vec();
        self
    }
}

/// Store double evaluating the same predicate and ordering the SQL encodes.
#[derive(Default)]
pub struct InMemoryProductRepository {
    fixtures: Vec<ProductFixture>,
    queries: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn new(fixtures: Vec<ProductFixture>) -> Self {
        Self {
            fixtures,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_cards(&self, query: &ProductQuery) -> Result<Vec<ProductCard>, RepositoryError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let images: HashMap<i64, &str> = self
            .fixtures
            .iter()
            .filter_map(|f| {
                f.main_image
                    .as_deref()
                    .map(|image| (f.product.product_id, image))
            })
            .collect();

        let joined = self
            .fixtures
            .iter()
            .map(|f| &f.product)
            .filter(|p| images.contains_key(&p.product_id));

        Ok(query
            .apply(joined)
            .into_iter()
            .map(|p| ProductCard {
                product_id: p.product_id,
                main_image: images[&p.product_id].to_string(),
                name: p.name.clone(),
                price: p.price,
            })
            .collect())
    }

    async fn find_details(
        &self,
        product_id: i64,
    ) -> Result<Option<ProductDetails>, RepositoryError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let Some(fixture) = self
            .fixtures
            .iter()
            .find(|f| f.product.product_id == product_id && !f.product.is_deleted)
        else {
            return Ok(None);
        };

        let Some(main_image) = fixture.main_image.clone() else {
            return Ok(None);
        };

        let p = &fixture.product;

        Ok(Some(ProductDetails {
            informs: ProductInforms {
                product_id: p.product_id,
                name: p.name.clone(),
                main_image_id: p.product_id * 100,
                main_image,
                price: p.price,
                person_category: p.person_category,
                season_category: p.season_category,
                product_category: p.product_category,
                like_count: p.like_count,
                created_at: p.created_at,
                description: p.description.clone(),
                total_stock: p.total_stock,
            },
            side_images: fixture.side_images.clone(),
            size_stocks: fixture
                .size_stocks
                .iter()
                .enumerate()
                .map(|(i, (size, stock))| ProductSizeStock {
                    product_detail_id: i as i64 + 1,
                    shoes_size: *size,
                    size_stock: *stock,
                })
                .collect(),
        }))
    }
}

/// Every call fails as if the pool were exhausted.
pub struct UnavailableRepository;

#[async_trait]
impl ProductQueryRepositoryTrait for UnavailableRepository {
    async fn find_cards(&self, _query: &ProductQuery) -> Result<Vec<ProductCard>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn find_details(
        &self,
        _product_id: i64,
    ) -> Result<Option<ProductDetails>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

/// Ids 1..=8. Product 5 is soft-deleted; product 6 has no MAIN image.
pub fn catalog() -> Vec<ProductFixture> {
    use PersonCategory::*;
    use ProductCategory::*;
    use SeasonCategory::*;

    vec![
        product(1, 10_000, Summer, Men, Sneakers, 5, 3),
        product(2, 5_000, AllSeason, AllPerson, Sneakers, 20, 10)
            .with_side_images(&["side-2a.png", "side-2b.png"])
            .with_sizes(&[(250, 3), (260, 0), (270, 7)]),
        product(3, 7_000, Winter, Women, Boots, 20, 8),
        product(4, 12_000, AllSeason, Children, Sneakers, 1, 30),
        product(5, 3_000, Summer, AllPerson, Sandals, 7, 1).deleted(),
        product(6, 8_000, AllSeason, Men, Sneakers, 9, 4).without_main_image(),
        product(7, 9_000, AllSeason, Women, RunningShoes, 11, 5).named("Trail Runner"),
        product(8, 4_000, Summer, Women, Sandals, 2, 2),
    ]
}
