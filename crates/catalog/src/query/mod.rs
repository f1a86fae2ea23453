mod paginator;
mod resolver;
mod sort;

pub use self::paginator::{MAX_PAGE_SIZE, PageWindow};
pub use self::resolver::{
    CatalogFilter, CategoryMatch, resolve, resolve_person, resolve_product_category,
    resolve_season,
};
pub use self::sort::{Direction, SortKey, SortOption, SortOrder};

use crate::model::product::Product;
use sqlx::{Postgres, QueryBuilder};

/// A fully validated listing request: predicate, ordering and page window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub filter: CatalogFilter,
    pub order: SortOrder,
    pub window: PageWindow,
}

impl ProductQuery {
    pub fn new(filter: CatalogFilter, option: SortOption, window: PageWindow) -> Self {
        Self {
            filter,
            order: option.ordering(),
            window,
        }
    }

    /// Card listing over products inner-joined to their single MAIN image.
    pub fn to_sql(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(
            r#"SELECT p.product_id, pi.saved_name AS main_image, p.name, p.price
FROM products p
INNER JOIN product_images pi
    ON pi.product_id = p.product_id AND pi.image_category = 'MAIN'
WHERE TRUE"#,
        );

        self.filter.push_conditions(&mut qb);

        qb.push(" ORDER BY ");
        qb.push(self.order.order_by_clause());
        qb.push(" LIMIT ");
        qb.push_bind(self.window.limit);
        qb.push(" OFFSET ");
        qb.push_bind(self.window.offset);

        qb
    }

    /// Applies filter, ordering and window to in-memory rows.
    pub fn apply<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut matched: Vec<&Product> = products
            .into_iter()
            .filter(|product| self.filter.matches(product))
            .collect();

        matched.sort_by(|a, b| self.order.compare(a, b));

        matched
            .into_iter()
            .skip(usize::try_from(self.window.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(self.window.limit).unwrap_or(0))
            .collect()
    }
}
