//! Geometry value types with two text encodings and point containment.
//!
//! The crate defines a closed set of shapes ([`Point`], [`Line`], [`MultiPoint`], [`Polygon`], [`MultiLine`],
//! [`MultiPolygon`], [`Circle`]), their collections ([`GeometryCollection`], [`Feature`], [`FeatureCollection`]) and
//! a [`BoundingBox`] decoration. All of them are gathered in the [`Geometry`] enum.
//!
//! Every type can be encoded into and decoded from:
//! * a GeoJSON-like format ([`ToGeoJson`], [`FromGeoJson`]),
//! * a WKT-like text format ([`ToWkt`], [`FromWkt`]).
//!
//! Containment, extent and coordinate traversal are provided by the [`Shape`] trait.
//!
//! ```
//! use geoshape::{FromGeoJson, FromWkt, Geometry, Point, Shape, ToWkt};
//!
//! let polygon = Geometry::from_geojson(
//!     r#"{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,4]],[[1,1],[2,1],[2,2],[1,2]]]}"#,
//! )
//! .unwrap();
//!
//! assert!(polygon.contains(&Point::new(3.0, 3.0)));
//! assert!(!polygon.contains(&Point::new(1.5, 1.5)));
//! assert_eq!(polygon.to_wkt(), "POLYGON((0 0, 4 0, 4 4, 0 4), (1 1, 2 1, 2 2, 1 2))");
//! assert_eq!(Geometry::from_wkt(&polygon.to_wkt()).unwrap(), polygon);
//! ```

pub mod cartesian;
pub mod codec;
pub mod geo;

mod bbox;
mod circle;
mod contains;
mod error;
mod feature;
mod feature_collection;
mod geometry;
mod geometry_collection;
mod geometry_type;
mod interop;
mod line;
mod multi_line;
mod multi_point;
mod multi_polygon;
mod options;
mod point;
mod polygon;
mod segment;
mod shape;

pub use bbox::BoundingBox;
pub use cartesian::{CartesianPoint2d, Orientation, Rect};
pub use circle::{Circle, CircleContainment, RadiusUnit};
pub use codec::{DbValue, Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
pub use error::GeoShapeError;
pub use feature::Feature;
pub use feature_collection::FeatureCollection;
pub use geometry::Geometry;
pub use geometry_collection::GeometryCollection;
pub use geometry_type::GeometryType;
pub use line::Line;
pub use multi_line::MultiLine;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use options::{DecodeOptions, RingValidation};
pub use point::Point;
pub use polygon::Polygon;
pub use segment::Segment;
pub use shape::{Shape, Transformer, Visitor};
