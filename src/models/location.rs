//! Location models
//!
//! Listing/user locations and the province catalogue used to pick them

use serde::{Deserialize, Serialize};

/// Latitude of the default map centre (Ankara)
pub const DEFAULT_LAT: f64 = 39.9334;

/// Longitude of the default map centre (Ankara)
pub const DEFAULT_LNG: f64 = 32.8597;

/// Geographic location attached to listings and users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
    pub district: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            lat: DEFAULT_LAT,
            lng: DEFAULT_LNG,
            city: String::new(),
            district: String::new(),
        }
    }
}

/// District of a province
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: u32,
    pub name: String,
}

/// Province centre coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Province with its districts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub districts: Vec<District>,
}

/// Envelope returned by the province service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceApiResponse {
    pub status: String,
    #[serde(default)]
    pub data: Vec<Province>,
}

impl Province {
    /// Names of the province's districts
    pub fn district_names(&self) -> Vec<&str> {
        self.districts.iter().map(|d| d.name.as_str()).collect()
    }

    /// Location for the province centre with an empty district.
    ///
    /// Falls back to the default map centre when the province has no coordinates.
    pub fn location(&self) -> Location {
        let (lat, lng) = self
            .coordinates
            .as_ref()
            .map(|c| (c.latitude, c.longitude))
            .unwrap_or((DEFAULT_LAT, DEFAULT_LNG));

        Location {
            lat,
            lng,
            city: self.name.clone(),
            district: String::new(),
        }
    }
}

/// Find a province by its display name
pub fn find_province<'a>(provinces: &'a [Province], name: &str) -> Option<&'a Province> {
    provinces.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_province_location_defaults() {
        let province = Province {
            id: 6,
            name: "Ankara".to_string(),
            coordinates: None,
            districts: vec![District { id: 1, name: "Çankaya".to_string() }],
        };

        let location = province.location();
        assert_eq!(location.lat, DEFAULT_LAT);
        assert_eq!(location.lng, DEFAULT_LNG);
        assert_eq!(location.city, "Ankara");
        assert!(location.district.is_empty());
        assert_eq!(province.district_names(), vec!["Çankaya"]);
    }
}
