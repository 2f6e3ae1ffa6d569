use crate::cartesian::Rect;
use crate::codec::points::write_json_numbers;
use crate::codec::{Envelope, FromGeoJson, ToGeoJson, ToWkt};
use crate::error::GeoShapeError;
use crate::options::DecodeOptions;
use crate::shape::{Shape, Transformer, Visitor};
use crate::{Geometry, Point};

/// A geometry decorated with a bounding box.
///
/// The box is a flat array with minimums of all axes followed by maximums (`[x_min, y_min, x_max, y_max]` for 2d
/// data). It is kept as given in the input and is not checked against the geometry.
///
/// The decoration only affects equality and the JSON form, all other behavior is delegated to the inner geometry.
/// A decorated geometry is never equal to an undecorated one.
///
/// ```
/// use geoshape::{Geometry, FromGeoJson, Point, ToGeoJson};
///
/// let json = r#"{"type":"Point","coordinates":[1,2],"bbox":[1,2]}"#;
/// let geometry = Geometry::from_geojson(json).unwrap();
///
/// assert_eq!(geometry.bbox(), Some(&[1.0, 2.0][..]));
/// assert_ne!(geometry, Geometry::Point(Point::new(1.0, 2.0)));
/// assert_eq!(geometry.to_geojson().unwrap(), json);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    bbox: Vec<f64>,
    geometry: Box<Geometry>,
}

impl BoundingBox {
    /// Decorates the geometry with the box. An existing decoration of the geometry is replaced.
    pub fn new(bbox: Vec<f64>, geometry: impl Into<Geometry>) -> Self {
        let geometry = match geometry.into() {
            Geometry::BoundingBox(decorated) => *decorated.geometry,
            other => other,
        };

        Self {
            bbox,
            geometry: Box::new(geometry),
        }
    }

    /// The box.
    pub fn bbox(&self) -> &[f64] {
        &self.bbox
    }

    /// Decorated geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Removes the decoration.
    pub fn into_geometry(self) -> Geometry {
        *self.geometry
    }
}

impl Shape for BoundingBox {
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

/// The text grammar has no place for the box, only the inner geometry is written.
impl ToWkt for BoundingBox {
    fn write_wkt(&self, out: &mut String) {
        self.geometry.write_wkt(out);
    }
}

impl ToGeoJson for BoundingBox {
    /// Writes the inner geometry with a `bbox` member appended as the last member of the object.
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        self.geometry.write_geojson(out)?;
        if out.ends_with('}') {
            out.pop();
            out.push_str(",\"bbox\":");
            write_json_numbers(out, &self.bbox)?;
            out.push('}');
        }

        Ok(())
    }
}

impl FromGeoJson for BoundingBox {
    /// Decodes a geometry of any type that has a non-empty `bbox` member.
    fn from_envelope(envelope: Envelope, options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        if envelope.non_empty_bbox().is_none() {
            return Err(GeoShapeError::malformed(
                "BoundingBox",
                &format!("{} without `bbox` member", envelope.kind),
            ));
        }

        match Geometry::from_envelope(envelope, options)? {
            Geometry::BoundingBox(decorated) => Ok(*decorated),
            other => Err(GeoShapeError::malformed("BoundingBox", &other.to_string())),
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}
