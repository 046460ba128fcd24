use async_trait::async_trait;
use serde_json::Value;

use crate::api::interface::{AddressApi, Api, PoiApi};
use crate::config::{Config, API_V1_PREFIX};
use crate::contract::{validate, ValidatedResponse};
use crate::entities::{LatLon, PointOfInterest, PoiOption, Route};
use crate::error::Error;

pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            base_url: config.api_base_url,
            http: reqwest::Client::new(),
        }
    }

    async fn fetch(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ValidatedResponse, Error> {
        let url = format!("{}{}{}", self.base_url, API_V1_PREFIX, path);

        let res = self.http.get(url).query(query).send().await?;

        // the backend wraps rejections in the envelope too, with 4xx/5xx
        // statuses, so the body is decoded regardless of the status code
        let body: Value = res.json().await?;

        validate(body)
    }
}

#[async_trait]
impl AddressApi for Client {
    #[tracing::instrument(skip(self))]
    async fn search_addresses(&self, search: &str, limit: u32) -> Result<Vec<PoiOption>, Error> {
        let validated = self
            .fetch(
                "/address",
                &[("search", search.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        validated.require_success()?.cast()
    }

    #[tracing::instrument(skip(self))]
    async fn find_route(&self, source: i64, dest: i64) -> Result<Route, Error> {
        let validated = self
            .fetch(
                "/address/route",
                &[("source", source.to_string()), ("dest", dest.to_string())],
            )
            .await?;

        validated.require_success()?.cast()
    }
}

#[async_trait]
impl PoiApi for Client {
    #[tracing::instrument(skip(self))]
    async fn list_poi_within_circle(
        &self,
        center: LatLon,
        radius: f64,
    ) -> Result<Vec<PointOfInterest>, Error> {
        let validated = self
            .fetch(
                "/poi/circle",
                &[
                    ("lat", center.lat.to_string()),
                    ("lon", center.lon.to_string()),
                    ("radius", radius.to_string()),
                ],
            )
            .await?;

        validated.require_success()?.cast()
    }

    #[tracing::instrument(skip(self))]
    async fn list_poi_within_bbox(
        &self,
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    ) -> Result<Vec<PointOfInterest>, Error> {
        let validated = self
            .fetch(
                "/poi/polygon",
                &[
                    ("lat_min", lat_min.to_string()),
                    ("lat_max", lat_max.to_string()),
                    ("lon_min", lon_min.to_string()),
                    ("lon_max", lon_max.to_string()),
                ],
            )
            .await?;

        validated.require_success()?.cast()
    }
}

impl Api for Client {}
