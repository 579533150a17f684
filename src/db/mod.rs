pub mod connection;
pub mod queries;
pub mod schema;
pub mod script;

pub use connection::Database;
pub use queries::TableCounts;
