use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductPaging {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: u32,

    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "Size must be between 1 and 100"))]
    pub size: u32,
}

impl Default for ProductPaging {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
        }
    }
}

/// Paging for the main page, which also takes a free-text name filter.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MainProductPaging {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: u32,

    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "Size must be between 1 and 100"))]
    pub size: u32,

    #[serde(default)]
    #[validate(length(max = 100, message = "Keyword is too long"))]
    pub keyword: Option<String>,
}

impl MainProductPaging {
    pub fn paging(&self) -> ProductPaging {
        ProductPaging {
            page: self.page,
            size: self.size,
        }
    }
}

impl Default for MainProductPaging {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
            keyword: None,
        }
    }
}

/// Search across every category dimension. Season, person and product
/// category are enum tokens (`SUMMER`, `WOMEN`, `SNEAKERS`); a missing season
/// or person falls back to its wildcard.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductSearch {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: u32,

    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "Size must be between 1 and 100"))]
    pub size: u32,

    #[serde(default)]
    pub season: Option<String>,

    #[serde(default)]
    pub person: Option<String>,

    #[serde(default)]
    pub product_category: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "Keyword is too long"))]
    pub keyword: Option<String>,
}

impl ProductSearch {
    pub fn paging(&self) -> ProductPaging {
        ProductPaging {
            page: self.page,
            size: self.size,
        }
    }
}

impl Default for ProductSearch {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
            season: None,
            person: None,
            product_category: None,
            keyword: None,
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    20
}
