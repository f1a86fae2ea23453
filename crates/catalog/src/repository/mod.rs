mod query;

pub use self::query::ProductQueryRepository;
