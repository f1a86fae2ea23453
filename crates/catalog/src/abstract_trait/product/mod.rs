mod repository;
mod service;

pub use self::repository::{DynProductQueryRepository, ProductQueryRepositoryTrait};
pub use self::service::{DynProductQueryService, ProductQueryServiceTrait};
