//! `Aetheris` - city search, budget split and landmark details for trip planning
//!
//! This library provides the city resolver, the budget allocator, the
//! per-session navigation state machine and the HTTP surface that serves
//! plain view models to a rendering client.

pub mod api;
pub mod budget;
pub mod city_resolver;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod session_store;
pub mod telemetry;
pub mod view;
pub mod web;

// Re-export core types for public API
pub use budget::{BudgetAllocator, BudgetBreakdown};
pub use city_resolver::{CityResolver, normalize_city_name};
pub use config::AetherisConfig;
pub use error::AetherisError;
pub use models::{ComfortTier, Currency, FeaturedCity, ResolvedCityData, TripInputs};
pub use session::{Page, SearchRequest, SessionState};
pub use session_store::{InMemorySessionStore, Session, SessionStore};
pub use view::PageView;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AetherisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
