//! Conversion of geometries to and from their text forms.
//!
//! Two grammars are supported:
//! * a GeoJSON-like JSON format (see [`ToGeoJson`] and [`FromGeoJson`]),
//! * a WKT-like linear text format (see [`ToWkt`] and [`FromWkt`]).
//!
//! Every geometry type of the crate implements all four traits. Decoding through a concrete type checks that the input
//! declares that type, while [`Geometry`](crate::Geometry) accepts any known type.

mod db_value;
pub(crate) mod json;
pub(crate) mod points;
pub(crate) mod wkt;

use serde_json::Value;

pub use db_value::DbValue;
pub use json::Envelope;

use crate::error::GeoShapeError;
use crate::options::DecodeOptions;

/// Encoding into the WKT-like text grammar.
pub trait ToWkt {
    /// Appends the text form to `out`.
    fn write_wkt(&self, out: &mut String);

    /// Text form of the geometry.
    fn to_wkt(&self) -> String {
        let mut out = String::new();
        self.write_wkt(&mut out);
        out
    }

    /// Value to store the geometry in a database: the text form.
    fn value(&self) -> DbValue {
        DbValue::Text(self.to_wkt())
    }
}

/// Decoding from the WKT-like text grammar.
pub trait FromWkt: Sized {
    /// Decodes the text form with the given options.
    fn from_wkt_with(input: &str, options: &DecodeOptions) -> Result<Self, GeoShapeError>;

    /// Decodes the text form with default options.
    fn from_wkt(input: &str) -> Result<Self, GeoShapeError> {
        Self::from_wkt_with(input, &DecodeOptions::default())
    }

    /// Decodes a database value holding the text form, either as text or as UTF-8 bytes.
    fn scan(source: &DbValue) -> Result<Self, GeoShapeError> {
        Self::scan_with(source, &DecodeOptions::default())
    }

    /// Same as [`FromWkt::scan`] with the given options.
    fn scan_with(source: &DbValue, options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        Self::from_wkt_with(source.as_text()?, options)
    }
}

/// Encoding into the GeoJSON-like format.
pub trait ToGeoJson {
    /// Appends the JSON form to `out`.
    ///
    /// Fails only if a coordinate is not finite. In that case `out` may contain a partially written object.
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError>;

    /// JSON form of the geometry.
    fn to_geojson(&self) -> Result<String, GeoShapeError> {
        let mut out = String::new();
        self.write_geojson(&mut out)?;
        Ok(out)
    }
}

/// Decoding from the GeoJSON-like format.
pub trait FromGeoJson: Sized {
    /// Decodes the geometry from an already read envelope.
    fn from_envelope(envelope: Envelope, options: &DecodeOptions) -> Result<Self, GeoShapeError>;

    /// Decodes JSON bytes with the given options.
    fn from_geojson_with(
        data: impl AsRef<[u8]>,
        options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        Self::from_envelope(Envelope::from_slice(data.as_ref())?, options)
    }

    /// Decodes JSON bytes with default options.
    fn from_geojson(data: impl AsRef<[u8]>) -> Result<Self, GeoShapeError> {
        Self::from_geojson_with(data, &DecodeOptions::default())
    }

    /// Decodes a parsed JSON value.
    fn from_json_value_with(value: Value, options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        Self::from_envelope(Envelope::from_value(value)?, options)
    }
}
