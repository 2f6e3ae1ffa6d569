use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;

/// Shallow view of a GeoJSON object.
///
/// Only the `type` member is interpreted when the envelope is read. All other members are kept as raw JSON values
/// until the decoder of the declared type picks them up.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Declared type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Coordinates of a simple geometry.
    #[serde(default)]
    pub coordinates: Option<Value>,
    /// Radius of a circle.
    #[serde(default)]
    pub radius: Option<f64>,
    /// Bounding box decoration.
    #[serde(default)]
    pub bbox: Option<Vec<f64>>,
    /// Geometry of a feature.
    #[serde(default)]
    pub geometry: Option<Value>,
    /// Properties of a feature.
    #[serde(default)]
    pub properties: Option<Value>,
    /// Members of a feature collection.
    #[serde(default)]
    pub features: Option<Vec<Value>>,
    /// Members of a geometry collection.
    #[serde(default)]
    pub geometries: Option<Vec<Value>>,
}

impl Envelope {
    /// Reads the envelope from JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self, GeoShapeError> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Reads the envelope from a parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, GeoShapeError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Declared type of the object.
    pub fn geometry_type(&self) -> Result<GeometryType, GeoShapeError> {
        self.kind.parse()
    }

    /// Fails with [`GeoShapeError::TypeMismatch`] if the declared type is not `expected`.
    pub fn expect_type(&self, expected: GeometryType) -> Result<(), GeoShapeError> {
        if self.kind == expected.as_str() {
            Ok(())
        } else {
            Err(GeoShapeError::TypeMismatch {
                expected,
                got: self.kind.clone(),
            })
        }
    }

    /// Non-empty bounding box of the object.
    pub fn non_empty_bbox(&self) -> Option<&[f64]> {
        self.bbox.as_deref().filter(|bbox| !bbox.is_empty())
    }

    /// Takes the `coordinates` member and deserializes it.
    pub(crate) fn take_coordinates<T: DeserializeOwned>(
        &mut self,
        kind: GeometryType,
    ) -> Result<T, GeoShapeError> {
        let coordinates = self
            .coordinates
            .take()
            .ok_or_else(|| missing_member(kind, "coordinates"))?;
        Ok(serde_json::from_value(coordinates)?)
    }
}

pub(crate) fn missing_member(kind: GeometryType, member: &str) -> GeoShapeError {
    GeoShapeError::malformed(kind.as_str(), &format!("missing member `{member}`"))
}

/// Writes `{"type":"<kind>","<member>":...}` with the member value produced by `write_member`.
pub(crate) fn write_object(
    out: &mut String,
    kind: GeometryType,
    member: &str,
    write_member: impl FnOnce(&mut String) -> Result<(), GeoShapeError>,
) -> Result<(), GeoShapeError> {
    out.push_str("{\"type\":\"");
    out.push_str(kind.as_str());
    out.push_str("\",\"");
    out.push_str(member);
    out.push_str("\":");
    write_member(out)?;
    out.push('}');
    Ok(())
}
