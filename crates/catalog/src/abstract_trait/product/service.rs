use crate::domain::{
    category::{PersonCategory, SeasonCategory},
    requests::product::{MainProductPaging, ProductPaging, ProductSearch},
    response::{
        api::ApiResponse,
        product::{ProductCardResponse, ProductDetailResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_main_cards(
        &self,
        req: &MainProductPaging,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError>;

    /// `season = None` is the "all seasons" listing.
    async fn find_season_cards(
        &self,
        req: &ProductPaging,
        season: Option<SeasonCategory>,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError>;
    async fn find_season_cards_by_option(
        &self,
        req: &ProductPaging,
        season: Option<SeasonCategory>,
        option: &str,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError>;

    async fn find_person_cards(
        &self,
        req: &ProductPaging,
        person: PersonCategory,
        product_category: &str,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError>;
    async fn find_person_cards_by_option(
        &self,
        req: &ProductPaging,
        person: PersonCategory,
        product_category: &str,
        option: &str,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError>;

    /// Constrains season, person and product category at once; `option`
    /// defaults to `POPULAR`.
    async fn search_cards(
        &self,
        req: &ProductSearch,
        option: Option<&str>,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError>;

    async fn find_product_details(
        &self,
        product_id: i64,
    ) -> Result<ApiResponse<ProductDetailResponse>, ServiceError>;
}
