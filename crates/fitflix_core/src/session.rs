//! crates/fitflix_core/src/session.rs
//!
//! Per-visitor state: the city the visitor is browsing.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::City;
use crate::ports::PortResult;

/// The state held for one visitor session. A fresh context has no city; the
/// first read settles it on the catalog default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    current_city: Option<City>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected city, initializing it to the catalog default on
    /// first use.
    pub fn get_current_city(&mut self, catalog: &Catalog) -> City {
        self.current_city
            .get_or_insert_with(|| catalog.default_city().clone())
            .clone()
    }

    /// Switches the session to `city_id`. An unknown id leaves the session
    /// untouched and returns `NotFound`.
    pub fn set_current_city(&mut self, catalog: &Catalog, city_id: &str) -> PortResult<City> {
        let city = catalog.find_city(city_id)?.clone();
        self.current_city = Some(city.clone());
        Ok(city)
    }
}
