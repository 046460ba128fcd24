use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{LatLon, PointOfInterest, PoiOption, Route};
use crate::error::Error;

#[async_trait]
pub trait AddressApi {
    async fn search_addresses(&self, search: &str, limit: u32) -> Result<Vec<PoiOption>, Error>;

    async fn find_route(&self, source: i64, dest: i64) -> Result<Route, Error>;
}

#[async_trait]
pub trait PoiApi {
    async fn list_poi_within_circle(
        &self,
        center: LatLon,
        radius: f64,
    ) -> Result<Vec<PointOfInterest>, Error>;

    async fn list_poi_within_bbox(
        &self,
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    ) -> Result<Vec<PointOfInterest>, Error>;
}

pub trait Api: AddressApi + PoiApi {}

pub type DynApi = Arc<dyn Api + Send + Sync>;
