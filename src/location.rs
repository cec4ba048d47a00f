use crate::error::{HlError, Result};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite()
            || !lon.is_finite()
            || !(-90.0..=90.0).contains(&lat)
            || !(-180.0..=180.0).contains(&lon)
        {
            return Err(HlError::InvalidCoordinate { lat, lon });
        }
        Ok(Coordinate { lat, lon })
    }

    /// Parses `{"lat": .., "lon": ..}`, range checked.
    pub fn from_json(payload: &str) -> Result<Self> {
        let raw: Coordinate = serde_json::from_str(payload)?;
        Coordinate::new(raw.lat, raw.lon)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    Default,
    Override,
}

#[derive(Debug, Clone)]
pub struct HomeLocation {
    default: Coordinate,
    current: Coordinate,
    source: LocationSource,
}

impl HomeLocation {
    pub fn new(default: Coordinate) -> Self {
        HomeLocation {
            default,
            current: default,
            source: LocationSource::Default,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.current
    }

    pub fn source(&self) -> LocationSource {
        self.source
    }

    pub fn override_with(&mut self, coordinate: Coordinate) {
        self.current = coordinate;
        self.source = LocationSource::Override;
    }

    /// Applies a pushed JSON update. On error the current location is kept.
    pub fn apply_update(&mut self, payload: &str) -> Result<Coordinate> {
        let coordinate = Coordinate::from_json(payload)?;
        self.override_with(coordinate);
        Ok(coordinate)
    }

    pub fn reset(&mut self) {
        self.current = self.default;
        self.source = LocationSource::Default;
    }
}
