use geo_types::{Coord, LineString};
use serde::{Deserialize, Serialize};

use crate::contract::Payload;
use crate::entities::LatLon;
use crate::error::Error;

/// An ordered path from origin to destination. The backend wraps the point
/// list in a `route` field on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "route")]
    pub points: Vec<LatLon>,
}

impl Route {
    pub fn new(points: Vec<LatLon>) -> Self {
        Self { points }
    }

    /// Fewer than two points means the backend found no usable path; the
    /// caller decides what to do with that, the contract does not reject it.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    pub fn line_string(&self) -> LineString<f64> {
        self.points
            .iter()
            .map(|point| Coord::<f64>::from(*point))
            .collect()
    }
}

impl Payload for Route {
    fn check(&self) -> Result<(), Error> {
        for point in &self.points {
            point.check()?;
        }

        Ok(())
    }
}
