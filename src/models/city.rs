//! City models: the curated featured set and resolved search results

use serde::{Deserialize, Serialize};

/// Map zoom used when centering on a single resolved city
pub const MAP_ZOOM: u8 = 12;

/// A curated city with hand-authored coordinates and landmarks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturedCity {
    /// Title-cased city name, used as lookup key
    pub name: &'static str,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Landmarks in display order
    pub landmarks: &'static [&'static str],
}

/// The fixed featured dataset, immutable for the life of the process
pub const FEATURED_CITIES: [FeaturedCity; 3] = [
    FeaturedCity {
        name: "Kyoto",
        latitude: 35.0116,
        longitude: 135.7681,
        landmarks: &["Fushimi Inari", "Kinkaku-ji", "Arashiyama"],
    },
    FeaturedCity {
        name: "Paris",
        latitude: 48.8566,
        longitude: 2.3522,
        landmarks: &["Eiffel Tower", "Louvre", "Arc de Triomphe"],
    },
    FeaturedCity {
        name: "Mumbai",
        latitude: 18.9226,
        longitude: 72.8333,
        landmarks: &["Gateway of India", "Marine Drive", "Elephanta Caves"],
    },
];

impl FeaturedCity {
    /// Look up a featured city by its exact (already normalized) name
    #[must_use]
    pub fn find(name: &str) -> Option<&'static FeaturedCity> {
        FEATURED_CITIES.iter().find(|city| city.name == name)
    }
}

/// Coordinates and landmarks produced for a searched city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCityData {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Landmarks in display order
    pub landmarks: Vec<String>,
}

impl ResolvedCityData {
    /// Whether `place` is one of this city's landmarks
    #[must_use]
    pub fn has_landmark(&self, place: &str) -> bool {
        self.landmarks.iter().any(|landmark| landmark == place)
    }

    /// Single-point marker for the map collaborator
    #[must_use]
    pub fn marker(&self) -> MapMarker {
        MapMarker {
            latitude: self.latitude,
            longitude: self.longitude,
            zoom: MAP_ZOOM,
        }
    }
}

impl From<&FeaturedCity> for ResolvedCityData {
    fn from(city: &FeaturedCity) -> Self {
        Self {
            latitude: city.latitude,
            longitude: city.longitude,
            landmarks: city.landmarks.iter().map(ToString::to_string).collect(),
        }
    }
}

/// A single coordinate for the map display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_featured_city() {
        let kyoto = FeaturedCity::find("Kyoto").unwrap();
        assert_eq!(kyoto.latitude, 35.0116);
        assert_eq!(kyoto.landmarks.len(), 3);
        assert!(FeaturedCity::find("kyoto").is_none());
        assert!(FeaturedCity::find("Atlantis").is_none());
    }

    #[test]
    fn test_resolved_from_featured_keeps_order() {
        let data = ResolvedCityData::from(FeaturedCity::find("Paris").unwrap());
        assert_eq!(data.landmarks, vec!["Eiffel Tower", "Louvre", "Arc de Triomphe"]);
        assert!(data.has_landmark("Louvre"));
        assert!(!data.has_landmark("louvre"));
    }

    #[test]
    fn test_marker_uses_city_zoom() {
        let data = ResolvedCityData::from(FeaturedCity::find("Mumbai").unwrap());
        let marker = data.marker();
        assert_eq!(marker.latitude, 18.9226);
        assert_eq!(marker.longitude, 72.8333);
        assert_eq!(marker.zoom, 12);
    }
}
