//! Turns the optional season / person / product-category inputs of a listing
//! request into the predicate applied to the product collection.
//!
//! Wildcard rules:
//! - no season: `ALL_SEASON` items only; a specific season also takes `ALL_SEASON` items.
//! - no person: `ALL_PERSON` items only; `MEN`/`WOMEN` also take `ALL_PERSON` items;
//!   `CHILDREN` is never widened.
//! - no product category: unconstrained; otherwise an exact match.
//!
//! Season listings leave the person dimension open and person listings leave the
//! season dimension open; [`resolve`] constrains all three.

use crate::{
    domain::category::{PersonCategory, ProductCategory, SeasonCategory},
    model::product::Product,
};
use shared::errors::ServiceError;
use sqlx::{Postgres, QueryBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMatch<T> {
    Any,
    OneOf(Vec<T>),
}

impl<T: PartialEq> CategoryMatch<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            CategoryMatch::Any => true,
            CategoryMatch::OneOf(values) => values.contains(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub season: CategoryMatch<SeasonCategory>,
    pub person: CategoryMatch<PersonCategory>,
    pub product: Option<ProductCategory>,
    pub keyword: Option<String>,
}

impl CatalogFilter {
    /// Main listing: no category constraint at all.
    pub fn unrestricted() -> Self {
        Self {
            season: CategoryMatch::Any,
            person: CategoryMatch::Any,
            product: None,
            keyword: None,
        }
    }

    /// Season listing: the person dimension is left open.
    pub fn for_season(season: Option<SeasonCategory>) -> Self {
        Self {
            season: resolve_season(season),
            ..Self::unrestricted()
        }
    }

    /// Person listing: the season dimension is left open.
    pub fn for_person(
        person: PersonCategory,
        product_category: Option<&str>,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            person: resolve_person(Some(person)),
            product: resolve_product_category(product_category)?,
            ..Self::unrestricted()
        })
    }

    pub fn with_keyword(mut self, keyword: Option<&str>) -> Self {
        self.keyword = keyword
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);
        self
    }

    /// Same predicate as [`CatalogFilter::push_conditions`], evaluated in process.
    ///
    /// The keyword folds ASCII case only, as `ILIKE` does under the `C` collation.
    pub fn matches(&self, product: &Product) -> bool {
        !product.is_deleted
            && self.season.accepts(&product.season_category)
            && self.person.accepts(&product.person_category)
            && self
                .product
                .is_none_or(|category| category == product.product_category)
            && self.keyword.as_deref().is_none_or(|keyword| {
                product
                    .name
                    .to_ascii_lowercase()
                    .contains(&keyword.to_ascii_lowercase())
            })
    }

    /// Appends `AND ...` clauses; the caller has already opened the `WHERE`.
    pub fn push_conditions(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" AND p.is_deleted = FALSE");

        if let CategoryMatch::OneOf(seasons) = &self.season {
            let tokens: Vec<String> = seasons.iter().map(|s| s.as_str().to_string()).collect();
            qb.push(" AND p.season_category = ANY(");
            qb.push_bind(tokens);
            qb.push(")");
        }

        if let CategoryMatch::OneOf(persons) = &self.person {
            let tokens: Vec<String> = persons.iter().map(|p| p.as_str().to_string()).collect();
            qb.push(" AND p.person_category = ANY(");
            qb.push_bind(tokens);
            qb.push(")");
        }

        if let Some(category) = self.product {
            qb.push(" AND p.product_category = ");
            qb.push_bind(category.as_str().to_string());
        }

        if let Some(keyword) = &self.keyword {
            qb.push(" AND p.name ILIKE ");
            qb.push_bind(format!("%{}%", escape_like(keyword)));
            qb.push(" ESCAPE '\\'");
        }
    }
}

pub fn resolve_season(season: Option<SeasonCategory>) -> CategoryMatch<SeasonCategory> {
    match season {
        Some(specific) if !specific.is_wildcard() => {
            CategoryMatch::OneOf(vec![specific, SeasonCategory::AllSeason])
        }
        _ => CategoryMatch::OneOf(vec![SeasonCategory::AllSeason]),
    }
}

pub fn resolve_person(person: Option<PersonCategory>) -> CategoryMatch<PersonCategory> {
    match person {
        // children's items are never folded into ALL_PERSON
        Some(PersonCategory::Children) => CategoryMatch::OneOf(vec![PersonCategory::Children]),
        Some(specific) if !specific.is_wildcard() => {
            CategoryMatch::OneOf(vec![specific, PersonCategory::AllPerson])
        }
        _ => CategoryMatch::OneOf(vec![PersonCategory::AllPerson]),
    }
}

pub fn resolve_product_category(
    token: Option<&str>,
) -> Result<Option<ProductCategory>, ServiceError> {
    token.map(str::parse).transpose()
}

/// Search listing: every dimension is constrained, absent ones fall back to the wildcards.
pub fn resolve(
    season: Option<SeasonCategory>,
    person: Option<PersonCategory>,
    product_category: Option<&str>,
) -> Result<CatalogFilter, ServiceError> {
    Ok(CatalogFilter {
        season: resolve_season(season),
        person: resolve_person(person),
        product: resolve_product_category(product_category)?,
        keyword: None,
    })
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
