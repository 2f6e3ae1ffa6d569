use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Rect};
use crate::codec::json::write_object;
use crate::codec::points::{point_from_position, scan_points, write_json_position, write_points};
use crate::codec::wkt::{strip_tag, Tagged};
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::error::GeoShapeError;
use crate::geo::GeoPoint;
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::shape::{Shape, Transformer, Visitor};

/// A point in 2d space.
///
/// For geographic data `x` is the longitude and `y` is the latitude, both in degrees.
///
/// Points are compared exactly. Use [`approx`] macros for comparison with a tolerance:
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use geoshape::Point;
///
/// assert_abs_diff_eq!(Point::new(0.1 + 0.2, 1.0), Point::new(0.3, 1.0));
/// assert_ne!(Point::new(0.1 + 0.2, 1.0), Point::new(0.3, 1.0));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Coordinates as `[x, y]`.
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl CartesianPoint2d for Point {
    type Num = f64;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl GeoPoint for Point {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.y
    }

    fn lon(&self) -> f64 {
        self.x
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl Shape for Point {
    fn contains(&self, point: &Point) -> bool {
        self == point
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Some(Rect::from_point(self))
    }

    fn transform(&mut self, transformer: &mut impl Transformer) {
        *self = transformer.transform(*self);
    }

    fn visit(&self, visitor: &mut impl Visitor) {
        visitor.visit(self);
    }
}

impl ToWkt for Point {
    fn write_wkt(&self, out: &mut String) {
        write_points(out, std::slice::from_ref(self), "POINT(", ")");
    }
}

impl FromWkt for Point {
    fn from_wkt_with(input: &str, _options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        match strip_tag(input, GeometryType::Point)? {
            Tagged::Body(body) => match scan_points(body)?.as_slice() {
                [point] => Ok(*point),
                _ => Err(GeoShapeError::malformed("Point", input)),
            },
            Tagged::Empty => Err(GeoShapeError::malformed("Point", input)),
        }
    }
}

impl ToGeoJson for Point {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_object(out, GeometryType::Point, "coordinates", |out| {
            write_json_position(out, self)
        })
    }
}

impl FromGeoJson for Point {
    fn from_envelope(
        mut envelope: Envelope,
        _options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        envelope.expect_type(GeometryType::Point)?;
        let position: Vec<f64> = envelope.take_coordinates(GeometryType::Point)?;
        point_from_position(&position)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}
