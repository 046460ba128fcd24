use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use waypoint::api::{AddressApi, Api, DynApi, PoiApi};
use waypoint::contract::{validate, ErrorItem, ResponseBody};
use waypoint::entities::{LatLon, PointOfInterest, PoiOption, Route};
use waypoint::error::{backend_error, Error};

fn sample_route() -> Route {
    Route::new(vec![
        LatLon::new(50.087, 14.421),
        LatLon::new(50.088, 14.423),
        LatLon::new(50.091, 14.424),
    ])
}

fn sample_poi() -> PointOfInterest {
    let mut tags = HashMap::new();
    tags.insert("opening_hours".to_string(), json!("Mo-Su 09:00-18:00"));
    tags.insert("wheelchair".to_string(), json!(true));

    PointOfInterest {
        latitude: 50.0875,
        longitude: 14.4213,
        name: "Old Town Hall".into(),
        categories: vec!["Tourism".into(), "Attraction".into()],
        tags,
    }
}

fn sample_options() -> Vec<PoiOption> {
    vec![
        PoiOption {
            value: "Staroměstské náměstí 1".into(),
            score: 4.2,
            label: "Address".into(),
            id: 101,
        },
        PoiOption {
            value: "Staroměstská 12".into(),
            score: 2.9,
            label: "Address".into(),
            id: 102,
        },
    ]
}

#[test]
fn route_round_trips_through_the_envelope() {
    let route = sample_route();
    let raw = serde_json::to_value(ResponseBody::new(route.clone())).unwrap();

    assert!(raw["data"]["route"].is_array());

    let decoded: Route = validate(raw).unwrap().cast().unwrap();
    assert_eq!(decoded, route);
}

#[test]
fn poi_round_trips_with_open_tags() {
    let poi = sample_poi();
    let raw = serde_json::to_value(ResponseBody::new(vec![poi.clone()])).unwrap();

    let decoded: Vec<PointOfInterest> = validate(raw).unwrap().cast().unwrap();
    assert_eq!(decoded, vec![poi]);
}

#[test]
fn option_list_round_trips_in_backend_order() {
    let options = sample_options();
    let raw = serde_json::to_value(ResponseBody::new(options.clone())).unwrap();

    let decoded: Vec<PoiOption> = validate(raw).unwrap().cast().unwrap();
    assert_eq!(decoded, options);
}

#[test]
fn builder_message_is_carried_through() {
    let raw =
        serde_json::to_value(ResponseBody::with_message(LatLon::new(50.0, 14.4), "running"))
            .unwrap();

    let validated = validate(raw).unwrap();
    assert_eq!(validated.message.as_deref(), Some("running"));
    assert_eq!(
        validated.cast::<LatLon>().unwrap(),
        LatLon::new(50.0, 14.4)
    );
}

struct StubApi;

#[async_trait]
impl AddressApi for StubApi {
    async fn search_addresses(&self, _search: &str, limit: u32) -> Result<Vec<PoiOption>, Error> {
        let mut options = sample_options();
        options.truncate(limit as usize);

        Ok(options)
    }

    async fn find_route(&self, source: i64, dest: i64) -> Result<Route, Error> {
        if source == dest {
            return Err(backend_error(
                "failed".into(),
                vec![ErrorItem::new("no route", "NOT_FOUND")],
            ));
        }

        Ok(sample_route())
    }
}

#[async_trait]
impl PoiApi for StubApi {
    async fn list_poi_within_circle(
        &self,
        _center: LatLon,
        _radius: f64,
    ) -> Result<Vec<PointOfInterest>, Error> {
        Ok(vec![sample_poi()])
    }

    async fn list_poi_within_bbox(
        &self,
        _lat_min: f64,
        _lat_max: f64,
        _lon_min: f64,
        _lon_max: f64,
    ) -> Result<Vec<PointOfInterest>, Error> {
        Ok(vec![])
    }
}

impl Api for StubApi {}

#[test]
fn apps_can_swap_the_backend_behind_dyn_api() {
    let api: DynApi = Arc::new(StubApi);

    tokio_test::block_on(async {
        let options = api.search_addresses("starom", 1).await.unwrap();
        assert_eq!(options.len(), 1);

        let route = api.find_route(101, 102).await.unwrap();
        assert!(!route.is_degenerate());

        let err = api.find_route(101, 101).await.unwrap_err();
        assert!(err.is_application_error());
        assert_eq!(err.errors[0].kind, "NOT_FOUND");

        let poi = api
            .list_poi_within_circle(LatLon::new(50.087, 14.421), 250.0)
            .await
            .unwrap();
        assert_eq!(poi[0].name, "Old Town Hall");
    });
}
