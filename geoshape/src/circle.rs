use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Rect};
use crate::codec::json::{missing_member, write_object};
use crate::codec::points::{
    point_from_position, scan_points, write_json_number, write_json_position, write_points,
};
use crate::codec::wkt::{strip_tag, unwrap_parens, Tagged};
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::error::GeoShapeError;
use crate::geo::{Datum, DistanceMethod};
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::shape::{Shape, Transformer, Visitor};
use crate::Point;

const METERS_IN_FOOT: f64 = 0.3048;

/// Unit the radius of a [`Circle`] is given in.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadiusUnit {
    /// International feet along the Earth surface.
    #[default]
    Feet,
    /// Meters along the Earth surface.
    Meters,
    /// Units of the coordinates. Containment is then checked with planar euclidean distance.
    Planar,
}

impl RadiusUnit {
    /// Radius in meters, `None` for [`RadiusUnit::Planar`].
    pub fn to_meters(&self, radius: f64) -> Option<f64> {
        match self {
            Self::Feet => Some(radius * METERS_IN_FOOT),
            Self::Meters => Some(radius),
            Self::Planar => None,
        }
    }
}

/// How a [`Circle`] decides if a point is inside.
///
/// With a geodesic [`RadiusUnit`] the center and the point are taken as longitude/latitude in degrees and their
/// great-circle distance on a sphere with the mean Earth radius is compared to the radius.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleContainment {
    /// Great-circle distance approximation.
    pub method: DistanceMethod,
    /// Unit of the radius.
    pub unit: RadiusUnit,
}

impl CircleContainment {
    /// Creates a new containment strategy.
    pub fn new(method: DistanceMethod, unit: RadiusUnit) -> Self {
        Self { method, unit }
    }

    /// Planar containment: euclidean distance in coordinate units.
    pub fn planar() -> Self {
        Self::new(DistanceMethod::default(), RadiusUnit::Planar)
    }

    /// Returns true if `point` is strictly closer than `radius` to `center`.
    pub fn contains(&self, center: &Point, radius: f64, point: &Point) -> bool {
        match self.unit.to_meters(radius) {
            Some(radius) => self
                .method
                .distance(center, point, &Datum::default())
                .is_some_and(|distance| distance < radius),
            None => CartesianPoint2d::distance(center, point) < radius,
        }
    }
}

/// A circle given by its center and radius.
///
/// In the text grammar a circle is approximated by a closed curve through its 4 cardinal points, using the radius
/// as a planar distance:
///
/// ```
/// use geoshape::{Circle, FromWkt, Point, ToWkt};
///
/// let circle = Circle::new(Point::new(0.0, 4.0), 2.0);
/// assert_eq!(circle.to_wkt(), "CIRCULARSTRING(2 4, 0 6, -2 4, 0 2, 2 4)");
/// assert_eq!(Circle::from_wkt(&circle.to_wkt()).ok(), Some(circle));
/// ```
///
/// Containment follows the [`CircleContainment`] strategy of the circle. By default the radius is in feet and the
/// haversine distance is used. Circles are equal if their centers and radii are equal, regardless of the strategy.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    center: Point,
    radius: f64,
    containment: CircleContainment,
}

impl Circle {
    /// Creates a circle with the default containment strategy. A negative radius is stored as its absolute value.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
            containment: CircleContainment::default(),
        }
    }

    /// Replaces the containment strategy.
    pub fn with_containment(mut self, containment: CircleContainment) -> Self {
        self.containment = containment;
        self
    }

    /// Center of the circle.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the circle.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Containment strategy of the circle.
    pub fn containment(&self) -> CircleContainment {
        self.containment
    }

    /// East, north, west and south points of the circle followed by the east point again.
    pub fn cardinal_points(&self) -> [Point; 5] {
        let (x, y, r) = (self.center.x(), self.center.y(), self.radius);
        [
            Point::new(x + r, y),
            Point::new(x, y + r),
            Point::new(x - r, y),
            Point::new(x, y - r),
            Point::new(x + r, y),
        ]
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius == other.radius
    }
}

impl Shape for Circle {
    fn contains(&self, point: &Point) -> bool {
        self.containment.contains(&self.center, self.radius, point)
    }

    fn bounding_rect(&self) -> Option<Rect> {
        let (x, y, r) = (self.center.x(), self.center.y(), self.radius);
        Some(Rect::new(x - r, y - r, x + r, y + r))
    }

    fn transform(&mut self, transformer: &mut impl Transformer) {
        self.center = transformer.transform(self.center);
    }

    fn visit(&self, visitor: &mut impl Visitor) {
        visitor.visit(&self.center);
    }
}

impl ToWkt for Circle {
    fn write_wkt(&self, out: &mut String) {
        write_points(out, &self.cardinal_points(), "CIRCULARSTRING(", ")");
    }
}

impl FromWkt for Circle {
    /// Decodes a `CIRCULARSTRING` whose first and third points are diametrically opposite.
    fn from_wkt_with(input: &str, options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        let points = match strip_tag(input, GeometryType::Circle)? {
            Tagged::Body(body) => scan_points(unwrap_parens(body, "Circle")?)?,
            Tagged::Empty => return Err(GeoShapeError::malformed("Circle", input)),
        };

        match points.as_slice() {
            [east, _, west, ..] => {
                let center = Point::new((east.x() + west.x()) / 2.0, (east.y() + west.y()) / 2.0);
                let radius = CartesianPoint2d::distance(east, west) / 2.0;
                Ok(Self::new(center, radius).with_containment(options.circle_containment))
            }
            _ => Err(GeoShapeError::malformed("Circle", input)),
        }
    }
}

impl ToGeoJson for Circle {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_object(out, GeometryType::Circle, "coordinates", |out| {
            write_json_position(out, &self.center)?;
            out.push_str(",\"radius\":");
            write_json_number(out, self.radius)
        })
    }
}

impl FromGeoJson for Circle {
    fn from_envelope(
        mut envelope: Envelope,
        options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        envelope.expect_type(GeometryType::Circle)?;
        let position: Vec<f64> = envelope.take_coordinates(GeometryType::Circle)?;
        let radius = envelope
            .radius
            .ok_or_else(|| missing_member(GeometryType::Circle, "radius"))?;

        Ok(Self::new(point_from_position(&position)?, radius)
            .with_containment(options.circle_containment))
    }
}

impl std::fmt::Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}
