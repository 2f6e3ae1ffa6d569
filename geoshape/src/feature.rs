use serde_json::Value;

use crate::cartesian::Rect;
use crate::codec::json::{missing_member, write_object};
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::shape::{Shape, Transformer, Visitor};
use crate::{Geometry, Point};

/// A geometry with arbitrary properties attached.
///
/// Properties are kept as an opaque JSON value and are never interpreted by the crate. Two features are equal if their
/// geometries are equal, properties are not compared.
///
/// ```
/// use geoshape::{Feature, FromGeoJson, Point, ToGeoJson};
///
/// let json = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":null}"#;
/// let feature = Feature::from_geojson(json).unwrap();
///
/// assert_eq!(feature, Feature::new(Point::new(1.0, 2.0)));
/// assert!(feature.properties().is_none());
/// assert_eq!(feature.to_geojson().unwrap(), json);
/// ```
#[derive(Debug, Clone)]
pub struct Feature {
    geometry: Box<Geometry>,
    properties: Option<Value>,
}

impl Feature {
    /// Creates a feature without properties.
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: Box::new(geometry.into()),
            properties: None,
        }
    }

    /// Sets properties of the feature.
    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Geometry of the feature.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Consumes the feature returning its geometry.
    pub fn into_geometry(self) -> Geometry {
        *self.geometry
    }

    /// Properties of the feature.
    pub fn properties(&self) -> Option<&Value> {
        self.properties.as_ref()
    }

    /// Value of a single property, if the properties are a JSON object that has it.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.geometry == other.geometry
    }
}

impl Shape for Feature {
    fn contains(&self, point: &Point) -> bool {
        self.geometry.contains(point)
    }

    fn bounding_rect(&self) -> Option<Rect> {
        self.geometry.bounding_rect()
    }

    fn transform(&mut self, transformer: &mut impl Transformer) {
        self.geometry.transform(transformer);
    }

    fn visit(&self, visitor: &mut impl Visitor) {
        self.geometry.visit(visitor);
    }
}

/// A feature is written as its geometry, properties are lost.
impl ToWkt for Feature {
    fn write_wkt(&self, out: &mut String) {
        self.geometry.write_wkt(out);
    }
}

/// Decodes any geometry into a feature without properties.
impl FromWkt for Feature {
    fn from_wkt_with(input: &str, options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        Ok(Self::new(Geometry::from_wkt_with(input, options)?))
    }
}

impl ToGeoJson for Feature {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_object(out, GeometryType::Feature, "geometry", |out| {
            self.geometry.write_geojson(out)?;
            out.push_str(",\"properties\":");
            match &self.properties {
                Some(properties) => out.push_str(&serde_json::to_string(properties)?),
                None => out.push_str("null"),
            }
            Ok(())
        })
    }
}

impl FromGeoJson for Feature {
    fn from_envelope(
        mut envelope: Envelope,
        options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        envelope.expect_type(GeometryType::Feature)?;
        let geometry = envelope
            .geometry
            .take()
            .ok_or_else(|| missing_member(GeometryType::Feature, "geometry"))?;
        let geometry = Geometry::from_json_value_with(geometry, options)
            .map_err(|err| GeoShapeError::nested(GeometryType::Feature, None, err))?;

        Ok(Self {
            geometry: Box::new(geometry),
            properties: envelope.properties.take(),
        })
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}
