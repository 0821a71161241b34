//! City Resolution Module
//!
//! Turns a free-text city name into coordinates and landmarks, either from
//! the featured dataset or by seeded synthesis keyed on the normalized name.

use rand_chacha::ChaCha12Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::models::{FeaturedCity, ResolvedCityData};

/// Latitude range for synthesized cities
const SYNTHETIC_LATITUDE: (f64, f64) = (-50.0, 60.0);
/// Longitude range for synthesized cities
const SYNTHETIC_LONGITUDE: (f64, f64) = (-170.0, 170.0);

/// Service for resolving city names
pub struct CityResolver;

impl CityResolver {
    /// Resolve a city name. Never fails; unknown names are synthesized.
    #[must_use]
    pub fn resolve(city_name: &str) -> ResolvedCityData {
        Self::resolve_normalized(&normalize_city_name(city_name))
    }

    /// Resolve a name that has already been through [`normalize_city_name`]
    #[must_use]
    pub fn resolve_normalized(city: &str) -> ResolvedCityData {
        if let Some(featured) = FeaturedCity::find(city) {
            debug!("Resolved featured city: {}", city);
            return ResolvedCityData::from(featured);
        }

        let data = Self::synthesize(city);
        debug!(
            "Synthesized city: {} at ({:.4}, {:.4})",
            city, data.latitude, data.longitude
        );
        data
    }

    fn synthesize(city: &str) -> ResolvedCityData {
        let mut rng = seeded_rng(city);
        // Draw order is part of the determinism contract: latitude first.
        let latitude = uniform(&mut rng, SYNTHETIC_LATITUDE);
        let longitude = uniform(&mut rng, SYNTHETIC_LONGITUDE);

        ResolvedCityData {
            latitude,
            longitude,
            landmarks: vec![
                format!("{city} Central Hub"),
                format!("Historic {city} Sector"),
            ],
        }
    }
}

/// Generator seeded only by the city name, independent of any global source.
/// ChaCha12 keeps the same stream across releases, unlike `StdRng`.
fn seeded_rng(city: &str) -> ChaCha12Rng {
    let seed: [u8; 32] = Sha256::digest(city.as_bytes()).into();
    ChaCha12Rng::from_seed(seed)
}

/// Sample `[low, high)` from the top 53 bits of one word, so the mapping
/// does not depend on any distribution implementation.
fn uniform(rng: &mut ChaCha12Rng, (low, high): (f64, f64)) -> f64 {
    let unit = (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64);
    low + unit * (high - low)
}

/// Trim surrounding whitespace and title-case each word.
///
/// A cased letter is upper-cased when it follows an uncased character, and
/// lower-cased otherwise, so `"  new YORK "` becomes `"New York"` and
/// `"o'neil"` becomes `"O'Neil"`. Uncased scripts such as CJK count as
/// boundaries.
#[must_use]
pub fn normalize_city_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut previous_is_letter = false;

    for ch in name.trim().chars() {
        if ch.is_lowercase() || ch.is_uppercase() {
            if previous_is_letter {
                normalized.extend(ch.to_lowercase());
            } else {
                normalized.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            normalized.push(ch);
            previous_is_letter = false;
        }
    }

    normalized
}
