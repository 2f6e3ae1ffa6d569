use crate::cartesian::Rect;
use crate::codec::json::write_object;
use crate::codec::points::write_json_list;
use crate::codec::wkt::{scan_point_lists, split_top_level, strip_tag, unwrap_parens, Tagged};
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::contains::rings_contain;
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::shape::{merged_rect, Shape, Transformer, Visitor};
use crate::{Point, Polygon};

/// A set of polygons.
///
/// Containment applies the even-odd rule to the rings of all polygons together, the same way a single polygon treats
/// its own rings. A polygon placed inside another member therefore acts as a hole.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a new multi-polygon.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Members of the multi-polygon.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Consumes the multi-polygon returning its members.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    /// Returns true if there are no members.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self::new(polygons)
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Shape for MultiPolygon {
    fn contains(&self, point: &Point) -> bool {
        self.bounding_rect().is_some_and(|rect| rect.contains(point))
            && rings_contain(
                self.polygons
                    .iter()
                    .flat_map(|polygon| polygon.rings().iter().map(Vec::as_slice)),
                point,
            )
    }

    fn bounding_rect(&self) -> Option<Rect> {
        merged_rect(&self.polygons)
    }

    fn transform(&mut self, transformer: &mut impl Transformer) {
        for polygon in &mut self.polygons {
            polygon.transform(transformer);
        }
    }

    fn visit(&self, visitor: &mut impl Visitor) {
        for polygon in &self.polygons {
            polygon.visit(visitor);
        }
    }
}

impl ToWkt for MultiPolygon {
    fn write_wkt(&self, out: &mut String) {
        if self.polygons.is_empty() {
            out.push_str("MULTIPOLYGON EMPTY");
            return;
        }

        out.push_str("MULTIPOLYGON(");
        for (i, polygon) in self.polygons.iter().enumerate() {
            if i != 0 {
                out.push(',');
            }
            out.push('(');
            polygon.write_rings_wkt(out, ",");
            out.push(')');
        }
        out.push(')');
    }
}

impl FromWkt for MultiPolygon {
    fn from_wkt_with(input: &str, options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        let body = match strip_tag(input, GeometryType::MultiPolygon)? {
            Tagged::Empty => return Ok(Self::default()),
            Tagged::Body(body) => body,
        };

        split_top_level(unwrap_parens(body, "MultiPolygon")?, "MultiPolygon")?
            .into_iter()
            .map(|polygon| {
                Polygon::validated(scan_point_lists(polygon, "MultiPolygon")?, options)
            })
            .collect()
    }
}

impl ToGeoJson for MultiPolygon {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_object(out, GeometryType::MultiPolygon, "coordinates", |out| {
            write_json_list(out, &self.polygons, |out, polygon| {
                polygon.write_rings_json(out)
            })
        })
    }
}

impl FromGeoJson for MultiPolygon {
    fn from_envelope(
        mut envelope: Envelope,
        options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        envelope.expect_type(GeometryType::MultiPolygon)?;
        let polygons: Vec<Vec<Vec<Vec<f64>>>> =
            envelope.take_coordinates(GeometryType::MultiPolygon)?;
        polygons
            .iter()
            .map(|rings| {
                if rings.is_empty() {
                    return Err(GeoShapeError::malformed("MultiPolygon", "[]"));
                }
                Polygon::from_positions(rings, options)
            })
            .collect()
    }
}

impl std::fmt::Display for MultiPolygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}
