use crate::{
    domain::category::{PersonCategory, ProductCategory, SeasonCategory},
    model::product::{ProductCard, ProductDetails, ProductSizeStock},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductCardResponse {
    pub product_id: i64,
    pub main_image: String,
    pub name: String,
    pub price: i64,
}

impl From<ProductCard> for ProductCardResponse {
    fn from(value: ProductCard) -> Self {
        ProductCardResponse {
            product_id: value.product_id,
            main_image: value.main_image,
            name: value.name,
            price: value.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SizeStockResponse {
    pub product_detail_id: i64,
    pub size: i32,
    pub stock: i32,
}

impl From<ProductSizeStock> for SizeStockResponse {
    fn from(value: ProductSizeStock) -> Self {
        SizeStockResponse {
            product_detail_id: value.product_detail_id,
            size: value.shoes_size,
            stock: value.size_stock,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailResponse {
    pub product_id: i64,
    pub name: String,
    pub main_image_id: i64,
    pub main_image: String,
    pub side_images: Vec<String>,
    pub price: i64,
    pub person_category: PersonCategory,
    pub season_category: SeasonCategory,
    pub product_category: ProductCategory,
    pub like_count: i64,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: NaiveDateTime,
    pub description: Option<String>,
    pub total_stock: i32,
    pub size_stocks: Vec<SizeStockResponse>,
}

impl From<ProductDetails> for ProductDetailResponse {
    fn from(value: ProductDetails) -> Self {
        let ProductDetails {
            informs,
            side_images,
            size_stocks,
        } = value;

        ProductDetailResponse {
            product_id: informs.product_id,
            name: informs.name,
            main_image_id: informs.main_image_id,
            main_image: informs.main_image,
            side_images,
            price: informs.price,
            person_category: informs.person_category,
            season_category: informs.season_category,
            product_category: informs.product_category,
            like_count: informs.like_count,
            created_at: informs.created_at,
            description: informs.description,
            total_stock: informs.total_stock,
            size_stocks: size_stocks.into_iter().map(Into::into).collect(),
        }
    }
}
