pub mod connection;
pub mod incidents;
pub mod schema;
pub mod scans;

pub use connection::Database;
