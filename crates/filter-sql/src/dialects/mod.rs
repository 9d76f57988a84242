//! Reference dialect drivers. Their keyword and translation tables are
//! configuration data; the shared logic lives in [`crate::driver`].

pub mod clickhouse;
pub mod mysql;
pub mod postgres;

pub use clickhouse::ClickHouse;
pub use mysql::MySql;
pub use postgres::Postgres;
