use crate::cartesian::Rect;
use crate::codec::json::write_object;
use crate::codec::points::{points_from_positions, write_json_list, write_json_points, write_points};
use crate::codec::wkt::{scan_point_lists, strip_tag, Tagged};
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::contains::rings_contain;
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::shape::{merged_rect, Shape, Transformer, Visitor};
use crate::{Line, Point};

/// A set of lines.
///
/// For containment every line is treated as an implicitly closed ring and the even-odd rule is applied to all of them
/// together. Points lying on any of the lines are inside.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MultiLine {
    lines: Vec<Line>,
}

impl MultiLine {
    /// Creates a new multi-line.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Members of the multi-line.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Consumes the multi-line returning its members.
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Returns true if there are no members.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<Line>> for MultiLine {
    fn from(lines: Vec<Line>) -> Self {
        Self::new(lines)
    }
}

impl FromIterator<Line> for MultiLine {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Shape for MultiLine {
    fn contains(&self, point: &Point) -> bool {
        self.bounding_rect().is_some_and(|rect| rect.contains(point))
            && rings_contain(self.lines.iter().map(Line::points), point)
    }

    fn bounding_rect(&self) -> Option<Rect> {
        merged_rect(&self.lines)
    }

    fn transform(&mut self, transformer: &mut impl Transformer) {
        for line in &mut self.lines {
            line.transform(transformer);
        }
    }

    fn visit(&self, visitor: &mut impl Visitor) {
        for line in &self.lines {
            line.visit(visitor);
        }
    }
}

impl ToWkt for MultiLine {
    fn write_wkt(&self, out: &mut String) {
        if self.lines.is_empty() {
            out.push_str("MULTILINESTRING EMPTY");
            return;
        }

        out.push_str("MULTILINESTRING(");
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                out.push(',');
            }
            write_points(out, line.points(), "(", ")");
        }
        out.push(')');
    }
}

impl FromWkt for MultiLine {
    fn from_wkt_with(input: &str, _options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        match strip_tag(input, GeometryType::MultiLineString)? {
            Tagged::Empty => Ok(Self::default()),
            Tagged::Body(body) => Ok(scan_point_lists(body, "MultiLineString")?
                .into_iter()
                .map(Line::new)
                .collect()),
        }
    }
}

impl ToGeoJson for MultiLine {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_object(out, GeometryType::MultiLineString, "coordinates", |out| {
            write_json_list(out, &self.lines, |out, line| {
                write_json_points(out, line.points())
            })
        })
    }
}

impl FromGeoJson for MultiLine {
    fn from_envelope(
        mut envelope: Envelope,
        _options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        envelope.expect_type(GeometryType::MultiLineString)?;
        let lines: Vec<Vec<Vec<f64>>> = envelope.take_coordinates(GeometryType::MultiLineString)?;
        lines
            .iter()
            .map(|line| {
                if line.is_empty() {
                    return Err(GeoShapeError::malformed("MultiLineString", "[]"));
                }
                points_from_positions(line).map(Line::new)
            })
            .collect()
    }
}

impl std::fmt::Display for MultiLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}
