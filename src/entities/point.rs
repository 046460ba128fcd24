use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::contract::Payload;
use crate::error::{payload_mismatch_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl Payload for LatLon {
    fn check(&self) -> Result<(), Error> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(payload_mismatch_error("`lat` is out of range"));
        }

        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(payload_mismatch_error("`lon` is out of range"));
        }

        Ok(())
    }
}

impl From<LatLon> for Coord<f64> {
    fn from(point: LatLon) -> Self {
        Coord {
            x: point.lon,
            y: point.lat,
        }
    }
}

impl From<LatLon> for Point<f64> {
    fn from(point: LatLon) -> Self {
        Point::new(point.lon, point.lat)
    }
}
