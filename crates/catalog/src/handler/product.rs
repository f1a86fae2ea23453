use crate::{
    abstract_trait::product::DynProductQueryService,
    domain::{
        category::{PersonCategory, SeasonCategory},
        requests::product::{MainProductPaging, ProductPaging, ProductSearch},
        response::{
            api::ApiResponse,
            product::{ProductCardResponse, ProductDetailResponse},
        },
    },
    middleware::validate::ValidatedQuery,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError, ServiceError};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/product/main",
    tag = "Product",
    params(MainProductPaging),
    responses(
        (status = 200, description = "Main page products by popularity", body = ApiResponse<Vec<ProductCardResponse>>),
        (status = 400, description = "Invalid paging", body = ErrorResponse),
        (status = 404, description = "No products matched", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_main_products(
    Extension(service): Extension<DynProductQueryService>,
    ValidatedQuery(params): ValidatedQuery<MainProductPaging>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_main_cards(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/season/{season}",
    tag = "Product",
    params(
        ("season" = String, Path, description = "all, summer or winter"),
        ProductPaging
    ),
    responses(
        (status = 200, description = "Season products by popularity", body = ApiResponse<Vec<ProductCardResponse>>),
        (status = 400, description = "Invalid season or paging", body = ErrorResponse),
        (status = 404, description = "No products matched", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_season_products(
    Extension(service): Extension<DynProductQueryService>,
    Path(season): Path<String>,
    ValidatedQuery(params): ValidatedQuery<ProductPaging>,
) -> Result<impl IntoResponse, HttpError> {
    let season = SeasonCategory::from_path(&season)?;
    let response = service.find_season_cards(&params, season).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/season/{season}/{option}",
    tag = "Product",
    params(
        ("season" = String, Path, description = "all, summer or winter"),
        ("option" = String, Path, description = "POPULAR, NEW_PRODUCT, BEST_SELLERS or LOW_PRICE"),
        ProductPaging
    ),
    responses(
        (status = 200, description = "Season products in the chosen order", body = ApiResponse<Vec<ProductCardResponse>>),
        (status = 400, description = "Invalid season, option or paging", body = ErrorResponse),
        (status = 404, description = "No products matched", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_season_products_by_option(
    Extension(service): Extension<DynProductQueryService>,
    Path((season, option)): Path<(String, String)>,
    ValidatedQuery(params): ValidatedQuery<ProductPaging>,
) -> Result<impl IntoResponse, HttpError> {
    let season = SeasonCategory::from_path(&season)?;
    let response = service
        .find_season_cards_by_option(&params, season, &option)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/{person}/{product_category}",
    tag = "Product",
    params(
        ("person" = String, Path, description = "men, women or children"),
        ("product_category" = String, Path, description = "e.g. SNEAKERS, BOOTS"),
        ProductPaging
    ),
    responses(
        (status = 200, description = "Person and category products by popularity", body = ApiResponse<Vec<ProductCardResponse>>),
        (status = 400, description = "Invalid category or paging", body = ErrorResponse),
        (status = 404, description = "No products matched", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_person_products(
    Extension(service): Extension<DynProductQueryService>,
    Path((person, product_category)): Path<(String, String)>,
    ValidatedQuery(params): ValidatedQuery<ProductPaging>,
) -> Result<impl IntoResponse, HttpError> {
    let person = PersonCategory::from_path(&person)?;
    let response = service
        .find_person_cards(&params, person, &product_category)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/{person}/{product_category}/{option}",
    tag = "Product",
    params(
        ("person" = String, Path, description = "men, women or children"),
        ("product_category" = String, Path, description = "e.g. SNEAKERS, BOOTS"),
        ("option" = String, Path, description = "POPULAR, NEW_PRODUCT, BEST_SELLERS or LOW_PRICE"),
        ProductPaging
    ),
    responses(
        (status = 200, description = "Person and category products in the chosen order", body = ApiResponse<Vec<ProductCardResponse>>),
        (status = 400, description = "Invalid category, option or paging", body = ErrorResponse),
        (status = 404, description = "No products matched", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_person_products_by_option(
    Extension(service): Extension<DynProductQueryService>,
    Path((person, product_category, option)): Path<(String, String, String)>,
    ValidatedQuery(params): ValidatedQuery<ProductPaging>,
) -> Result<impl IntoResponse, HttpError> {
    let person = PersonCategory::from_path(&person)?;
    let response = service
        .find_person_cards_by_option(&params, person, &product_category, &option)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/search",
    tag = "Product",
    params(ProductSearch),
    responses(
        (status = 200, description = "Products matching every given category, by popularity", body = ApiResponse<Vec<ProductCardResponse>>),
        (status = 400, description = "Invalid category or paging", body = ErrorResponse),
        (status = 404, description = "No products matched", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn search_products(
    Extension(service): Extension<DynProductQueryService>,
    ValidatedQuery(params): ValidatedQuery<ProductSearch>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.search_cards(&params, None).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/search/{option}",
    tag = "Product",
    params(
        ("option" = String, Path, description = "POPULAR, NEW_PRODUCT, BEST_SELLERS or LOW_PRICE"),
        ProductSearch
    ),
    responses(
        (status = 200, description = "Products matching every given category, in the chosen order", body = ApiResponse<Vec<ProductCardResponse>>),
        (status = 400, description = "Invalid category, option or paging", body = ErrorResponse),
        (status = 404, description = "No products matched", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn search_products_by_option(
    Extension(service): Extension<DynProductQueryService>,
    Path(option): Path<String>,
    ValidatedQuery(params): ValidatedQuery<ProductSearch>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.search_cards(&params, Some(&option)).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/details/{product_id}",
    tag = "Product",
    params(("product_id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductDetailResponse>),
        (status = 400, description = "Product ID is not a number", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product_details(
    Extension(service): Extension<DynProductQueryService>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let product_id = product_id.parse::<i64>().map_err(|_| {
        ServiceError::Validation(vec![format!("product_id: not a number: {product_id}")])
    })?;
    let response = service.find_product_details(product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(service: DynProductQueryService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/product/main", get(get_main_products))
        .route("/product/season/{season}", get(get_season_products))
        .route(
            "/product/season/{season}/{option}",
            get(get_season_products_by_option),
        )
        .route("/product/search", get(search_products))
        .route("/product/search/{option}", get(search_products_by_option))
        .route("/product/details/{product_id}", get(get_product_details))
        .route(
            "/product/{person}/{product_category}",
            get(get_person_products),
        )
        .route(
            "/product/{person}/{product_category}/{option}",
            get(get_person_products_by_option),
        )
        .layer(Extension(service))
}
