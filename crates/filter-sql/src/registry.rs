//! Driver registry: a concurrency-safe name → driver map.
//!
//! Applications normally own a [`Registry`] explicitly at their composition
//! root. A process-wide default registry pre-loaded with the built-in
//! dialects is also provided for the common case; registration against it is
//! an explicit startup step, not an import side effect.

use crate::{
    dialects::{ClickHouse, MySql, Postgres},
    driver::Driver,
    error::SqlError,
};
use lazy_static::lazy_static;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tracing::debug;

/// Name → driver map. Lookups are case-insensitive; several names may alias
/// one driver instance. Registration overwrites on conflict (last writer
/// wins) and is expected only at startup, never on a request path.
#[derive(Default)]
pub struct Registry {
    drivers: RwLock<HashMap<String, Arc<dyn Driver>>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Registry {
            drivers: RwLock::new(HashMap::new()),
        }
    }

    /// A registry pre-loaded with the built-in dialects under their
    /// canonical names and common aliases.
    pub fn with_builtin_dialects() -> Self {
        let registry = Registry::new();

        let postgres: Arc<dyn Driver> = Arc::new(Postgres::new());
        registry.register("postgres", Arc::clone(&postgres));
        registry.register("postgresql", Arc::clone(&postgres));
        registry.register("pg", postgres);

        let mysql: Arc<dyn Driver> = Arc::new(MySql::new());
        registry.register("mysql", Arc::clone(&mysql));
        registry.register("mariadb", mysql);

        let clickhouse: Arc<dyn Driver> = Arc::new(ClickHouse::new());
        registry.register("clickhouse", Arc::clone(&clickhouse));
        registry.register("ch", clickhouse);

        registry
    }

    /// Registers a driver under `name`, replacing any previous registration.
    ///
    /// # Panics
    ///
    /// Panics on an empty name. Registration happens at startup, so a bad
    /// name is a programming error, not a runtime condition.
    pub fn register(&self, name: &str, driver: Arc<dyn Driver>) {
        assert!(!name.is_empty(), "driver name must not be empty");

        let mut drivers = self.drivers.write().expect("driver registry lock poisoned");
        drivers.insert(name.to_ascii_lowercase(), driver);
        debug!(name, "registered SQL driver");
    }

    /// Looks up a driver by name, case-insensitively.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Driver>, SqlError> {
        let drivers = self.drivers.read().expect("driver registry lock poisoned");
        drivers
            .get(&name.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| SqlError::DriverNotRegistered(name.to_string()))
    }

    /// All registered names, including aliases, in no particular order.
    pub fn names(&self) -> Vec<String> {
        let drivers = self.drivers.read().expect("driver registry lock poisoned");
        drivers.keys().cloned().collect()
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: Registry = Registry::with_builtin_dialects();
}

/// The process-wide default registry, pre-loaded with built-in dialects.
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Registers a driver in the default registry.
pub fn register_driver(name: &str, driver: Arc<dyn Driver>) {
    DEFAULT_REGISTRY.register(name, driver);
}

/// Looks up a driver in the default registry.
pub fn driver(name: &str) -> Result<Arc<dyn Driver>, SqlError> {
    DEFAULT_REGISTRY.get(name)
}

/// Names registered in the default registry.
pub fn drivers() -> Vec<String> {
    DEFAULT_REGISTRY.names()
}
