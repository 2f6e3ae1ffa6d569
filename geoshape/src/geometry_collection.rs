use crate::cartesian::Rect;
use crate::codec::json::{missing_member, write_object};
use crate::codec::points::write_json_list;
use crate::codec::wkt::{split_top_level, strip_tag, unwrap_parens, Tagged};
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::shape::{merged_rect, Shape, Transformer, Visitor};
use crate::{Geometry, Point};

/// Ordered collection of geometries of any type.
///
/// ```
/// use geoshape::{FromWkt, Geometry, GeometryCollection, Line, Point};
///
/// let collection = GeometryCollection::from_wkt("GEOMETRYCOLLECTION(POINT(0 0), LINESTRING(0 0, 1 1))").unwrap();
/// assert_eq!(collection.geometries().len(), 2);
/// assert_eq!(collection.geometries()[0], Geometry::Point(Point::new(0.0, 0.0)));
/// assert_eq!(
///     collection.geometries()[1],
///     Geometry::Line(Line::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]))
/// );
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Creates a new collection.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }

    /// Members of the collection.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Consumes the collection returning its members.
    pub fn into_geometries(self) -> Vec<Geometry> {
        self.geometries
    }

    /// Appends a geometry.
    pub fn push(&mut self, geometry: impl Into<Geometry>) {
        self.geometries.push(geometry.into());
    }

    /// Returns true if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Writes `GEOMETRYCOLLECTION(a, b, ...)`, `GEOMETRYCOLLECTION EMPTY` if there are no members.
    pub(crate) fn write_members_wkt<'a>(
        out: &mut String,
        members: impl IntoIterator<Item = &'a Geometry>,
    ) {
        let mut members = members.into_iter().peekable();
        if members.peek().is_none() {
            out.push_str("GEOMETRYCOLLECTION EMPTY");
            return;
        }

        out.push_str("GEOMETRYCOLLECTION(");
        for (i, geometry) in members.enumerate() {
            if i != 0 {
                out.push_str(", ");
            }
            geometry.write_wkt(out);
        }
        out.push(')');
    }
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(geometries: Vec<Geometry>) -> Self {
        Self::new(geometries)
    }
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Shape for GeometryCollection {
    fn contains(&self, point: &Point) -> bool {
        !self.geometries.is_empty()
            && self.geometries.iter().all(|geometry| geometry.contains(point))
    }

    fn bounding_rect(&self) -> Option<Rect> {
        merged_rect(&self.geometries)
    }

    fn transform(&mut self, transformer: &mut impl Transformer) {
        for geometry in &mut self.geometries {
            geometry.transform(transformer);
        }
    }

    fn visit(&self, visitor: &mut impl Visitor) {
        for geometry in &self.geometries {
            geometry.visit(visitor);
        }
    }
}

impl ToWkt for GeometryCollection {
    fn write_wkt(&self, out: &mut String) {
        Self::write_members_wkt(out, &self.geometries);
    }
}

impl FromWkt for GeometryCollection {
    fn from_wkt_with(input: &str, options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        let body = match strip_tag(input, GeometryType::GeometryCollection)? {
            Tagged::Empty => return Ok(Self::default()),
            Tagged::Body(body) => unwrap_parens(body, "GeometryCollection")?,
        };
        if body.trim().is_empty() {
            return Ok(Self::default());
        }

        split_top_level(body, "GeometryCollection")?
            .into_iter()
            .enumerate()
            .map(|(i, member)| {
                Geometry::from_wkt_with(member, options).map_err(|err| {
                    GeoShapeError::nested(GeometryType::GeometryCollection, Some(i), err)
                })
            })
            .collect()
    }
}

impl ToGeoJson for GeometryCollection {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_object(out, GeometryType::GeometryCollection, "geometries", |out| {
            write_json_list(out, &self.geometries, |out, geometry| {
                geometry.write_geojson(out)
            })
        })
    }
}

impl FromGeoJson for GeometryCollection {
    fn from_envelope(
        mut envelope: Envelope,
        options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        envelope.expect_type(GeometryType::GeometryCollection)?;
        envelope
            .geometries
            .take()
            .ok_or_else(|| missing_member(GeometryType::GeometryCollection, "geometries"))?
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                Geometry::from_json_value_with(value, options).map_err(|err| {
                    GeoShapeError::nested(GeometryType::GeometryCollection, Some(i), err)
                })
            })
            .collect()
    }
}

impl std::fmt::Display for GeometryCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}
