//! Conversions between the geometries of this crate and other geometry libraries.
//!
//! * `geo-types` feature (enabled by default): `From`/`TryFrom` implementations for the `geo_types` crate types.
//! * `geojson` feature: `TryFrom` implementations for geometries, features and feature collections of the `geojson`
//!   crate.

#[cfg(feature = "geo-types")]
mod geo_types;

#[cfg(feature = "geojson")]
mod geojson;
