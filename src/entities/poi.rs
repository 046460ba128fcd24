use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contract::Payload;
use crate::entities::LatLon;
use crate::error::{payload_mismatch_error, Error};

/// A named location with backend-defined categories and free-form tags.
/// `categories` arrives in backend order and may repeat; `tags` is an open
/// schema, unknown keys are optional metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub categories: Vec<String>,
    pub tags: HashMap<String, Value>,
}

impl PointOfInterest {
    pub fn coordinates(&self) -> LatLon {
        LatLon::new(self.latitude, self.longitude)
    }
}

impl Payload for PointOfInterest {
    fn check(&self) -> Result<(), Error> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(payload_mismatch_error("`latitude` is out of range"));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(payload_mismatch_error("`longitude` is out of range"));
        }

        if self.name.is_empty() {
            return Err(payload_mismatch_error("`name` is empty"));
        }

        Ok(())
    }
}

/// A ranked search suggestion. `score` is only comparable to other options
/// from the same search response; `id` is the backend identifier the route
/// endpoints accept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoiOption {
    pub value: String,
    pub score: f64,
    pub label: String,
    pub id: i64,
}

impl Payload for PoiOption {
    fn check(&self) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn poi(name: &str) -> PointOfInterest {
        PointOfInterest {
            latitude: 50.087,
            longitude: 14.421,
            name: name.into(),
            categories: vec!["Amenity".into(), "Cafe".into()],
            tags: HashMap::new(),
        }
    }

    #[test]
    fn name_must_be_non_empty() {
        assert!(poi("Orloj").check().is_ok());
        assert!(poi("Orloj").coordinates().in_bounds());
        assert_eq!(poi("").check().unwrap_err().code, 11);
    }

    #[test]
    fn categories_may_be_empty_and_tags_are_open() {
        let mut value = serde_json::to_value(poi("Orloj")).unwrap();
        value["categories"] = json!([]);
        value["tags"] = json!({"opening_hours": "24/7", "levels": 3, "fee": false});

        let decoded: PointOfInterest = serde_json::from_value(value).unwrap();
        assert!(decoded.check().is_ok());
        assert_eq!(decoded.tags["levels"], json!(3));
    }

    #[test]
    fn option_lists_keep_backend_order() {
        // ranking comes from the backend; sorting by score is the caller's
        // call and nothing here reorders the records
        let options = vec![
            PoiOption {
                value: "Wenceslas Square".into(),
                score: 1.2,
                label: "Address".into(),
                id: 11,
            },
            PoiOption {
                value: "Wenceslas Fountain".into(),
                score: 3.8,
                label: "Address".into(),
                id: 12,
            },
            PoiOption {
                value: "Wenceslas Monument".into(),
                score: 2.5,
                label: "Address".into(),
                id: 13,
            },
        ];

        let value = serde_json::to_value(&options).unwrap();
        let decoded: Vec<PoiOption> = serde_json::from_value(value).unwrap();

        assert_eq!(decoded, options);
        let ids: Vec<i64> = decoded.iter().map(|option| option.id).collect();
        assert_eq!(ids, vec![11, 12, 13]);
    }
}
