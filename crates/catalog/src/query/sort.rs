use crate::model::product::Product;
use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use std::{cmp::Ordering, fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOption {
    Popular,
    NewProduct,
    BestSellers,
    LowPrice,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        Self::Popular,
        Self::NewProduct,
        Self::BestSellers,
        Self::LowPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Popular => "POPULAR",
            SortOption::NewProduct => "NEW_PRODUCT",
            SortOption::BestSellers => "BEST_SELLERS",
            SortOption::LowPrice => "LOW_PRICE",
        }
    }

    pub fn ordering(&self) -> SortOrder {
        match self {
            SortOption::Popular => SortOrder::new(SortKey::LikeCount, Direction::Desc),
            SortOption::BestSellers => SortOrder::new(SortKey::SalesVolume, Direction::Desc),
            SortOption::NewProduct => SortOrder::new(SortKey::CreatedAt, Direction::Desc),
            SortOption::LowPrice => SortOrder::new(SortKey::Price, Direction::Asc),
        }
    }
}

/// No fallback: anything but the four exact tokens is rejected.
impl FromStr for SortOption {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| ServiceError::InvalidOption(s.to_string()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    LikeCount,
    SalesVolume,
    CreatedAt,
    Price,
}

impl SortKey {
    fn column(&self) -> &'static str {
        match self {
            SortKey::LikeCount => "p.like_count",
            SortKey::SalesVolume => "p.sales_volume",
            SortKey::CreatedAt => "p.created_at",
            SortKey::Price => "p.price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: Direction,
}

impl SortOrder {
    pub fn new(key: SortKey, direction: Direction) -> Self {
        Self { key, direction }
    }

    /// Ties break on `product_id` so that consecutive pages never overlap.
    pub fn order_by_clause(&self) -> String {
        let direction = match self.direction {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };
        format!("{} {direction}, p.product_id ASC", self.key.column())
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let primary = match self.key {
            SortKey::LikeCount => a.like_count.cmp(&b.like_count),
            SortKey::SalesVolume => a.sales_volume.cmp(&b.sales_volume),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Price => a.price.cmp(&b.price),
        };

        let primary = match self.direction {
            Direction::Asc => primary,
            Direction::Desc => primary.reverse(),
        };

        primary.then_with(|| a.product_id.cmp(&b.product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_table() {
        assert_eq!(
            SortOption::Popular.ordering(),
            SortOrder::new(SortKey::LikeCount, Direction::Desc)
        );
        assert_eq!(
            SortOption::BestSellers.ordering(),
            SortOrder::new(SortKey::SalesVolume, Direction::Desc)
        );
        assert_eq!(
            SortOption::NewProduct.ordering(),
            SortOrder::new(SortKey::CreatedAt, Direction::Desc)
        );
        assert_eq!(
            SortOption::LowPrice.ordering(),
            SortOrder::new(SortKey::Price, Direction::Asc)
        );
    }

    #[test]
    fn unknown_token_is_an_error_not_a_default() {
        assert!(matches!(
            "FOO".parse::<SortOption>(),
            Err(ServiceError::InvalidOption(token)) if token == "FOO"
        ));
        assert!("low_price".parse::<SortOption>().is_err());
        assert!("".parse::<SortOption>().is_err());
        assert_eq!("LOW_PRICE".parse::<SortOption>().unwrap(), SortOption::LowPrice);
    }

    #[test]
    fn order_by_clause_has_tie_breaker() {
        assert_eq!(
            SortOption::LowPrice.ordering().order_by_clause(),
            "p.price ASC, p.product_id ASC"
        );
        assert_eq!(
            SortOption::Popular.ordering().order_by_clause(),
            "p.like_count DESC, p.product_id ASC"
        );
    }
}
