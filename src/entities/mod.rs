mod point;
mod poi;
mod route;

pub use point::LatLon;
pub use poi::{PointOfInterest, PoiOption};
pub use route::Route;
