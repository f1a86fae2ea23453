use crate::domain::category::{PersonCategory, ProductCategory, SeasonCategory};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `products` row as the catalog sees it.
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub price: i64,
    pub season_category: SeasonCategory,
    pub person_category: PersonCategory,
    pub product_category: ProductCategory,
    pub like_count: i64,
    pub sales_volume: i64,
    pub description: Option<String>,
    pub total_stock: i32,
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
}

/// One listing row: a product joined to its MAIN image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProductCard {
    pub product_id: i64,
    pub main_image: String,
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProductInforms {
    pub product_id: i64,
    pub name: String,
    pub main_image_id: i64,
    pub main_image: String,
    pub price: i64,
    #[sqlx(try_from = "String")]
    pub person_category: PersonCategory,
    #[sqlx(try_from = "String")]
    pub season_category: SeasonCategory,
    #[sqlx(try_from = "String")]
    pub product_category: ProductCategory,
    pub like_count: i64,
    pub created_at: NaiveDateTime,
    pub description: Option<String>,
    pub total_stock: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProductSizeStock {
    pub product_detail_id: i64,
    pub shoes_size: i32,
    pub size_stock: i32,
}

/// Everything the detail page needs, read in one snapshot.
#[derive(Debug, Clone)]
pub struct ProductDetails {
    pub informs: ProductInforms,
    pub side_images: Vec<String>,
    pub size_stocks: Vec<ProductSizeStock>,
}
