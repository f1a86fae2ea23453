use crate::{
    abstract_trait::product::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{
        category::{PersonCategory, SeasonCategory},
        requests::product::{MainProductPaging, ProductPaging, ProductSearch},
        response::{
            api::ApiResponse,
            product::{ProductCardResponse, ProductDetailResponse},
        },
    },
    query::{CatalogFilter, PageWindow, ProductQuery, SortOption, resolve},
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", registry);

        Self { query, metrics }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("product-query-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, operation: &str, message: &str) {
        self.complete_tracing_internal(tracing_ctx, operation, true, message);
    }

    fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        operation: &str,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, operation, false, error_message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        operation: &str,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(operation, Method::Get, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    /// Validates paging and the two free-form tokens, in that order, without
    /// touching the store.
    fn build_query(
        req: &ProductPaging,
        filter: Result<CatalogFilter, ServiceError>,
        option: Option<&str>,
    ) -> Result<ProductQuery, ServiceError> {
        let window = PageWindow::new(req.page, req.size)?;
        let filter = filter?;
        let option = match option {
            Some(token) => token.parse::<SortOption>()?,
            None => SortOption::Popular,
        };

        Ok(ProductQuery::new(filter, option, window))
    }

    async fn fetch_cards(
        &self,
        operation: &str,
        mut attributes: Vec<KeyValue>,
        query: Result<ProductQuery, ServiceError>,
        success_message: &str,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError> {
        attributes.push(KeyValue::new("component", "product"));
        attributes.push(KeyValue::new("operation", operation.to_string()));

        let tracing_ctx = self.start_tracing(operation, attributes);

        let query = match query {
            Ok(query) => query,
            Err(err) => {
                self.complete_tracing_error(&tracing_ctx, operation, &err.to_string());
                return Err(err);
            }
        };

        let cards = match self.query.find_cards(&query).await {
            Ok(cards) => cards,
            Err(err) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    operation,
                    &format!("Database error: {err}"),
                );
                return Err(ServiceError::Repo(err));
            }
        };

        if cards.is_empty() {
            self.complete_tracing_error(&tracing_ctx, operation, "No products matched");
            return Err(ServiceError::ProductEmpty);
        }

        info!("✅ Found {} products", cards.len());
        self.complete_tracing_success(&tracing_ctx, operation, success_message);

        Ok(ApiResponse::success(
            success_message,
            cards.into_iter().map(ProductCardResponse::from).collect(),
        ))
    }
}

fn paging_attributes(req: &ProductPaging) -> Vec<KeyValue> {
    vec![
        KeyValue::new("page", i64::from(req.page)),
        KeyValue::new("size", i64::from(req.size)),
    ]
}

fn season_label(season: Option<SeasonCategory>) -> &'static str {
    season.map_or("ALL", |s| s.as_str())
}

fn search_filter(req: &ProductSearch) -> Result<CatalogFilter, ServiceError> {
    let season = req
        .season
        .as_deref()
        .map(str::parse::<SeasonCategory>)
        .transpose()?;
    let person = req
        .person
        .as_deref()
        .map(str::parse::<PersonCategory>)
        .transpose()?;

    Ok(resolve(season, person, req.product_category.as_deref())?
        .with_keyword(req.keyword.as_deref()))
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_main_cards(
        &self,
        req: &MainProductPaging,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError> {
        info!(
            "🏠 Finding main page products | Page: {}, Size: {}, Keyword: {:?}",
            req.page, req.size, req.keyword
        );

        let paging = req.paging();
        let filter = Ok(CatalogFilter::unrestricted().with_keyword(req.keyword.as_deref()));

        let mut attributes = paging_attributes(&paging);
        attributes.push(KeyValue::new(
            "keyword",
            req.keyword.clone().unwrap_or_default(),
        ));

        self.fetch_cards(
            "product_find_main",
            attributes,
            Self::build_query(&paging, filter, None),
            "Main page products retrieved successfully",
        )
        .await
    }

    async fn find_season_cards(
        &self,
        req: &ProductPaging,
        season: Option<SeasonCategory>,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError> {
        info!(
            "🌤️ Finding season products | Season: {}, Page: {}, Size: {}",
            season_label(season),
            req.page,
            req.size
        );

        let mut attributes = paging_attributes(req);
        attributes.push(KeyValue::new("season", season_label(season)));

        self.fetch_cards(
            "product_find_by_season",
            attributes,
            Self::build_query(req, Ok(CatalogFilter::for_season(season)), None),
            "Season products retrieved successfully",
        )
        .await
    }

    async fn find_season_cards_by_option(
        &self,
        req: &ProductPaging,
        season: Option<SeasonCategory>,
        option: &str,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError> {
        info!(
            "🌤️ Finding season products by option | Season: {}, Option: {option}, Page: {}, Size: {}",
            season_label(season),
            req.page,
            req.size
        );

        let mut attributes = paging_attributes(req);
        attributes.push(KeyValue::new("season", season_label(season)));
        attributes.push(KeyValue::new("option", option.to_string()));

        self.fetch_cards(
            "product_find_by_season_option",
            attributes,
            Self::build_query(req, Ok(CatalogFilter::for_season(season)), Some(option)),
            "Season products retrieved successfully by option",
        )
        .await
    }

    async fn find_person_cards(
        &self,
        req: &ProductPaging,
        person: PersonCategory,
        product_category: &str,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError> {
        info!(
            "🧍 Finding person products | Person: {person}, Category: {product_category}, Page: {}, Size: {}",
            req.page, req.size
        );

        let mut attributes = paging_attributes(req);
        attributes.push(KeyValue::new("person", person.as_str()));
        attributes.push(KeyValue::new(
            "product_category",
            product_category.to_string(),
        ));

        self.fetch_cards(
            "product_find_by_person",
            attributes,
            Self::build_query(
                req,
                CatalogFilter::for_person(person, Some(product_category)),
                None,
            ),
            "Person products retrieved successfully",
        )
        .await
    }

    async fn find_person_cards_by_option(
        &self,
        req: &ProductPaging,
        person: PersonCategory,
        product_category: &str,
        option: &str,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError> {
        info!(
            "🧍 Finding person products by option | Person: {person}, Category: {product_category}, Option: {option}, Page: {}, Size: {}",
            req.page, req.size
        );

        let mut attributes = paging_attributes(req);
        attributes.push(KeyValue::new("person", person.as_str()));
        attributes.push(KeyValue::new(
            "product_category",
            product_category.to_string(),
        ));
        attributes.push(KeyValue::new("option", option.to_string()));

        self.fetch_cards(
            "product_find_by_person_option",
            attributes,
            Self::build_query(
                req,
                CatalogFilter::for_person(person, Some(product_category)),
                Some(option),
            ),
            "Person products retrieved successfully by option",
        )
        .await
    }

    async fn search_cards(
        &self,
        req: &ProductSearch,
        option: Option<&str>,
    ) -> Result<ApiResponse<Vec<ProductCardResponse>>, ServiceError> {
        info!(
            "🔎 Searching products | Season: {:?}, Person: {:?}, Category: {:?}, Keyword: {:?}, Option: {:?}, Page: {}, Size: {}",
            req.season, req.person, req.product_category, req.keyword, option, req.page, req.size
        );

        let paging = req.paging();
        let mut attributes = paging_attributes(&paging);
        for (key, value) in [
            ("season", &req.season),
            ("person", &req.person),
            ("product_category", &req.product_category),
            ("keyword", &req.keyword),
        ] {
            attributes.push(KeyValue::new(key, value.clone().unwrap_or_default()));
        }
        attributes.push(KeyValue::new(
            "option",
            option.unwrap_or(SortOption::Popular.as_str()).to_string(),
        ));

        self.fetch_cards(
            "product_search",
            attributes,
            Self::build_query(&paging, search_filter(req), option),
            "Products searched successfully",
        )
        .await
    }

    async fn find_product_details(
        &self,
        product_id: i64,
    ) -> Result<ApiResponse<ProductDetailResponse>, ServiceError> {
        info!("🆔 Finding product details | ID: {product_id}");

        let operation = "product_find_details";
        let tracing_ctx = self.start_tracing(
            operation,
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", operation),
                KeyValue::new("product.id", product_id),
            ],
        );

        let details = match self.query.find_details(product_id).await {
            Ok(Some(details)) => details,
            Ok(None) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    operation,
                    &format!("Product {product_id} not found"),
                );
                return Err(ServiceError::NotFound(format!("Product {product_id}")));
            }
            Err(err) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    operation,
                    &format!("Database error: {err}"),
                );
                return Err(ServiceError::Repo(err));
            }
        };

        self.complete_tracing_success(&tracing_ctx, operation, "Product details retrieved");

        Ok(ApiResponse::success(
            "Product details retrieved successfully",
            ProductDetailResponse::from(details),
        ))
    }
}
