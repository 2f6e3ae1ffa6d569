//! Points in geographic coordinates (latitude and longitude, see [`GeoPoint`]) and great-circle distances between
//! them.

mod datum;
mod distance;
mod point;

pub use datum::Datum;
pub use distance::DistanceMethod;
pub use point::GeoPoint;
