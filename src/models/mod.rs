//! Data models for the Aetheris application
//!
//! This module contains the core domain models organized by concern:
//! - City: Featured dataset, resolved search results and map markers
//! - Currency: Display currencies and fixed conversion rates
//! - Trip: Budget, trip length and comfort tier inputs

pub mod city;
pub mod currency;
pub mod trip;

// Re-export all public types for convenient access
pub use city::{FEATURED_CITIES, FeaturedCity, MapMarker, ResolvedCityData};
pub use currency::{Currency, CurrencyRate};
pub use trip::{ComfortTier, TripInputs};
