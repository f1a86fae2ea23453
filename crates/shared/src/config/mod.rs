mod database;

pub use self::database::{ConnectionManager, ConnectionPool, begin_read_only};
