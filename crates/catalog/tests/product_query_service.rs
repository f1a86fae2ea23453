mod common;

use catalog::{
    abstract_trait::product::{DynProductQueryService, ProductQueryServiceTrait},
    domain::{
        category::{PersonCategory, ProductCategory, SeasonCategory},
        requests::product::{MainProductPaging, ProductPaging, ProductSearch},
    },
    service::ProductQueryService,
};
use common::{InMemoryProductRepository, UnavailableRepository, catalog, product};
use prometheus_client::registry::Registry;
use shared::errors::ServiceError;
use std::sync::Arc;

fn service_over(repo: Arc<InMemoryProductRepository>) -> DynProductQueryService {
    Arc::new(ProductQueryService::new(repo, &mut Registry::default()))
}

fn setup() -> (Arc<InMemoryProductRepository>, DynProductQueryService) {
    let repo = Arc::new(InMemoryProductRepository::new(catalog()));
    let service = service_over(repo.clone());
    (repo, service)
}

fn paging(page: u32, size: u32) -> ProductPaging {
    ProductPaging { page, size }
}

fn ids<T>(cards: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    cards.iter().map(id).collect()
}

#[tokio::test]
async fn low_price_summer_scenario_includes_all_season_items() {
    use PersonCategory::*;
    use ProductCategory::*;
    use SeasonCategory::*;

    let repo = Arc::new(InMemoryProductRepository::new(vec![
        product(1, 10_000, Summer, Men, Sneakers, 5, 0),
        product(2, 5_000, AllSeason, AllPerson, Sneakers, 20, 0),
    ]));
    let service = service_over(repo);

    let response = service
        .find_season_cards_by_option(&paging(1, 10), Some(Summer), "LOW_PRICE")
        .await
        .unwrap();

    assert_eq!(response.status, "success");
    assert_eq!(ids(&response.data, |c| c.product_id), vec![2, 1]);
    assert_eq!(response.data[0].price, 5_000);
    assert_eq!(response.data[0].main_image, "main-2.png");
}

#[tokio::test]
async fn men_and_women_see_all_person_items_but_children_never_do() {
    let (_, service) = setup();

    let men = service
        .find_person_cards(&paging(1, 20), PersonCategory::Men, "SNEAKERS")
        .await
        .unwrap();
    assert_eq!(ids(&men.data, |c| c.product_id), vec![2, 1]);

    let children = service
        .find_person_cards(&paging(1, 20), PersonCategory::Children, "SNEAKERS")
        .await
        .unwrap();
    assert_eq!(ids(&children.data, |c| c.product_id), vec![4]);
}

#[tokio::test]
async fn women_listing_includes_all_person_items() {
    let (_, service) = setup();

    let women = service
        .find_person_cards(&paging(1, 20), PersonCategory::Women, "SNEAKERS")
        .await
        .unwrap();
    assert_eq!(ids(&women.data, |c| c.product_id), vec![2]);

    let runners = service
        .find_person_cards_by_option(
            &paging(1, 20),
            PersonCategory::Women,
            "RUNNING_SHOES",
            "LOW_PRICE",
        )
        .await
        .unwrap();
    assert_eq!(ids(&runners.data, |c| c.product_id), vec![7]);
}

#[tokio::test]
async fn soft_deleted_products_are_never_listed() {
    let (_, service) = setup();

    for option in ["POPULAR", "NEW_PRODUCT", "BEST_SELLERS", "LOW_PRICE"] {
        let response = service
            .find_season_cards_by_option(&paging(1, 100), Some(SeasonCategory::Summer), option)
            .await
            .unwrap();
        assert!(response.data.iter().all(|c| c.product_id != 5), "{option}");
    }

    let main = service
        .find_main_cards(&MainProductPaging {
            page: 1,
            size: 100,
            keyword: None,
        })
        .await
        .unwrap();
    assert!(main.data.iter().all(|c| c.product_id != 5));
}

#[tokio::test]
async fn products_without_main_image_are_not_listed() {
    let (_, service) = setup();

    let men = service
        .find_person_cards(&paging(1, 20), PersonCategory::Men, "SNEAKERS")
        .await
        .unwrap();

    assert!(men.data.iter().all(|c| c.product_id != 6));
}

#[tokio::test]
async fn consecutive_pages_split_the_double_page() {
    let (_, service) = setup();

    let main = |page, size| MainProductPaging {
        page,
        size,
        keyword: None,
    };

    let first = service.find_main_cards(&main(1, 2)).await.unwrap().data;
    let second = service.find_main_cards(&main(2, 2)).await.unwrap().data;
    let double = service.find_main_cards(&main(1, 4)).await.unwrap().data;

    assert!(first.iter().all(|c| !second.contains(c)));

    let joined: Vec<_> = first.into_iter().chain(second).collect();
    assert_eq!(joined, double);
    // likes 20 and 20 tie; the lower id comes first
    assert_eq!(ids(&double, |c| c.product_id), vec![2, 3, 7, 1]);
}

#[tokio::test]
async fn person_low_price_pages_break_price_ties_by_id() {
    use PersonCategory::*;
    use ProductCategory::*;
    use SeasonCategory::*;

    let repo = Arc::new(InMemoryProductRepository::new(vec![
        product(11, 4_000, Summer, Women, Sandals, 0, 0),
        product(12, 3_000, AllSeason, AllPerson, Sandals, 0, 0),
        product(13, 4_000, Winter, Women, Sandals, 0, 0),
        product(14, 3_000, Summer, Women, Sandals, 0, 0),
        product(15, 2_000, Summer, Men, Sandals, 0, 0),
        product(16, 1_000, Summer, Children, Sandals, 0, 0),
    ]));
    let service = service_over(repo.clone());

    let fetch = |page: u32, size: u32| {
        let service = service.clone();
        async move {
            service
                .find_person_cards_by_option(&paging(page, size), Women, "SANDALS", "LOW_PRICE")
                .await
        }
    };

    let first = fetch(1, 2).await.unwrap().data;
    let second = fetch(2, 2).await.unwrap().data;
    let double = fetch(1, 4).await.unwrap().data;

    assert_eq!(ids(&first, |c| c.product_id), vec![12, 14]);
    assert_eq!(ids(&second, |c| c.product_id), vec![11, 13]);

    let joined: Vec<_> = first.into_iter().chain(second).collect();
    assert_eq!(joined, double);

    assert!(matches!(fetch(3, 2).await, Err(ServiceError::ProductEmpty)));
    assert_eq!(repo.query_count(), 4);
}

#[tokio::test]
async fn each_option_orders_the_season_listing() {
    let (_, service) = setup();

    let cases = [
        ("POPULAR", vec![2, 7, 1, 8, 4]),
        ("BEST_SELLERS", vec![4, 2, 7, 1, 8]),
        ("NEW_PRODUCT", vec![8, 7, 4, 2, 1]),
        ("LOW_PRICE", vec![8, 2, 7, 1, 4]),
    ];

    for (option, expected) in cases {
        let response = service
            .find_season_cards_by_option(&paging(1, 20), Some(SeasonCategory::Summer), option)
            .await
            .unwrap();
        assert_eq!(ids(&response.data, |c| c.product_id), expected, "{option}");
    }

    let prices: Vec<i64> = service
        .find_season_cards_by_option(&paging(1, 20), Some(SeasonCategory::Summer), "LOW_PRICE")
        .await
        .unwrap()
        .data
        .iter()
        .map(|c| c.price)
        .collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn default_season_listing_is_popularity_over_all_season_items() {
    let (_, service) = setup();

    let response = service
        .find_season_cards(&paging(1, 20), None)
        .await
        .unwrap();

    assert_eq!(ids(&response.data, |c| c.product_id), vec![2, 7, 4]);
}

#[tokio::test]
async fn unknown_option_fails_before_querying() {
    let (repo, service) = setup();

    let err = service
        .find_season_cards_by_option(&paging(1, 10), Some(SeasonCategory::Winter), "FOO")
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidOption(ref token) if token == "FOO"));
    assert_eq!(repo.query_count(), 0);
}

#[tokio::test]
async fn unknown_category_fails_before_querying() {
    let (repo, service) = setup();

    let err = service
        .find_person_cards_by_option(&paging(1, 10), PersonCategory::Women, "HATS", "POPULAR")
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidCategory(ref token) if token == "HATS"));
    assert_eq!(repo.query_count(), 0);
}

#[tokio::test]
async fn invalid_paging_fails_before_querying() {
    let (repo, service) = setup();

    let zero_page = service
        .find_season_cards(&paging(0, 10), None)
        .await
        .unwrap_err();
    let oversized = service
        .find_season_cards(&paging(1, 101), None)
        .await
        .unwrap_err();

    assert!(matches!(zero_page, ServiceError::Validation(_)));
    assert!(matches!(oversized, ServiceError::Validation(_)));
    assert_eq!(repo.query_count(), 0);
}

#[tokio::test]
async fn empty_results_are_reported_as_product_empty() {
    let (repo, service) = setup();

    let no_match = service
        .find_person_cards(&paging(1, 20), PersonCategory::Children, "BOOTS")
        .await
        .unwrap_err();
    assert!(matches!(no_match, ServiceError::ProductEmpty));

    let past_the_end = service
        .find_season_cards(&paging(5, 20), None)
        .await
        .unwrap_err();
    assert!(matches!(past_the_end, ServiceError::ProductEmpty));

    assert_eq!(repo.query_count(), 2);
}

#[tokio::test]
async fn main_keyword_filters_by_name() {
    let (_, service) = setup();

    let response = service
        .find_main_cards(&MainProductPaging {
            page: 1,
            size: 20,
            keyword: Some("trail".into()),
        })
        .await
        .unwrap();

    assert_eq!(ids(&response.data, |c| c.product_id), vec![7]);
    assert_eq!(response.data[0].name, "Trail Runner");
}

#[tokio::test]
async fn search_without_season_or_person_is_wildcard_only() {
    let (_, service) = setup();

    let response = service
        .search_cards(&ProductSearch::default(), None)
        .await
        .unwrap();

    // 2 is the only listed ALL_SEASON and ALL_PERSON product
    assert_eq!(ids(&response.data, |c| c.product_id), vec![2]);
}

#[tokio::test]
async fn search_constrains_every_dimension_and_keyword() {
    let (_, service) = setup();

    let search = |category: Option<&str>, keyword: Option<&str>| ProductSearch {
        season: Some("SUMMER".into()),
        person: Some("WOMEN".into()),
        product_category: category.map(str::to_string),
        keyword: keyword.map(str::to_string),
        ..ProductSearch::default()
    };

    let broad = service.search_cards(&search(None, None), Some("LOW_PRICE")).await.unwrap();
    assert_eq!(ids(&broad.data, |c| c.product_id), vec![8, 2, 7]);

    let named = service.search_cards(&search(None, Some("SHOE")), None).await.unwrap();
    assert_eq!(ids(&named.data, |c| c.product_id), vec![2, 8]);

    let narrow = service
        .search_cards(&search(Some("SANDALS"), Some("shoe 8")), None)
        .await
        .unwrap();
    assert_eq!(ids(&narrow.data, |c| c.product_id), vec![8]);

    let none = service
        .search_cards(&search(Some("BOOTS"), None), None)
        .await
        .unwrap_err();
    assert!(matches!(none, ServiceError::ProductEmpty));
}

#[tokio::test]
async fn search_rejects_unknown_tokens_before_querying() {
    let (repo, service) = setup();

    let season = ProductSearch {
        season: Some("SPRING".into()),
        ..ProductSearch::default()
    };
    let err = service.search_cards(&season, None).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidCategory(ref token) if token == "SPRING"));

    let person = ProductSearch {
        person: Some("men".into()),
        ..ProductSearch::default()
    };
    let err = service.search_cards(&person, None).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidCategory(ref token) if token == "men"));

    let err = service
        .search_cards(&ProductSearch::default(), Some("CHEAPEST"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidOption(_)));

    assert_eq!(repo.query_count(), 0);
}

#[tokio::test]
async fn details_assemble_images_and_sizes() {
    let (_, service) = setup();

    let details = service.find_product_details(2).await.unwrap().data;

    assert_eq!(details.product_id, 2);
    assert_eq!(details.main_image, "main-2.png");
    assert_eq!(details.side_images, vec!["side-2a.png", "side-2b.png"]);
    assert_eq!(details.person_category, PersonCategory::AllPerson);
    assert_eq!(details.season_category, SeasonCategory::AllSeason);
    assert_eq!(details.product_category, ProductCategory::Sneakers);
    assert_eq!(
        details
            .size_stocks
            .iter()
            .map(|s| (s.size, s.stock))
            .collect::<Vec<_>>(),
        vec![(250, 3), (260, 0), (270, 7)]
    );
}

#[tokio::test]
async fn details_of_missing_or_deleted_products_are_not_found() {
    let (_, service) = setup();

    for id in [5, 999] {
        let err = service.find_product_details(id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "product {id}");
    }
}

#[tokio::test]
async fn store_failures_surface_as_repository_errors() {
    let service: DynProductQueryService = Arc::new(ProductQueryService::new(
        Arc::new(UnavailableRepository),
        &mut Registry::default(),
    ));

    let err = service
        .find_season_cards(&paging(1, 10), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Repo(_)));
    assert_eq!(err.code(), "INTERNAL_ERROR");

    let err = service.find_product_details(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::Repo(_)));
}
