//! See documentation for [`GeometryType`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoShapeError;

/// Type tag of a geometry.
///
/// The tag is what the GeoJSON `type` member holds, and it also determines the leading token of the WKT form (see
/// [`GeometryType::wkt_tag`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// [`Point`](crate::Point)
    Point,
    /// [`Line`](crate::Line)
    LineString,
    /// [`MultiPoint`](crate::MultiPoint)
    MultiPoint,
    /// [`Polygon`](crate::Polygon)
    Polygon,
    /// [`MultiLine`](crate::MultiLine)
    MultiLineString,
    /// [`MultiPolygon`](crate::MultiPolygon)
    MultiPolygon,
    /// [`Circle`](crate::Circle)
    Circle,
    /// [`GeometryCollection`](crate::GeometryCollection)
    GeometryCollection,
    /// [`Feature`](crate::Feature)
    Feature,
    /// [`FeatureCollection`](crate::FeatureCollection)
    FeatureCollection,
}

impl GeometryType {
    /// All known tags.
    pub const ALL: [GeometryType; 10] = [
        Self::Point,
        Self::LineString,
        Self::MultiPoint,
        Self::Polygon,
        Self::MultiLineString,
        Self::MultiPolygon,
        Self::Circle,
        Self::GeometryCollection,
        Self::Feature,
        Self::FeatureCollection,
    ];

    /// Value of the GeoJSON `type` member.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::MultiPoint => "MultiPoint",
            Self::Polygon => "Polygon",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::Circle => "Circle",
            Self::GeometryCollection => "GeometryCollection",
            Self::Feature => "Feature",
            Self::FeatureCollection => "FeatureCollection",
        }
    }

    /// Leading token of the WKT form.
    ///
    /// Features and feature collections have no WKT form of their own: they are written as their geometry and as
    /// a `GEOMETRYCOLLECTION` respectively, so `None` is returned for them.
    pub const fn wkt_tag(&self) -> Option<&'static str> {
        match self {
            Self::Point => Some("POINT"),
            Self::LineString => Some("LINESTRING"),
            Self::MultiPoint => Some("MULTIPOINT"),
            Self::Polygon => Some("POLYGON"),
            Self::MultiLineString => Some("MULTILINESTRING"),
            Self::MultiPolygon => Some("MULTIPOLYGON"),
            Self::Circle => Some("CIRCULARSTRING"),
            Self::GeometryCollection => Some("GEOMETRYCOLLECTION"),
            Self::Feature | Self::FeatureCollection => None,
        }
    }

    /// Finds the type whose WKT tag is the leading token of `input`.
    ///
    /// The token must be followed by `(`, whitespace or the end of the input, so `POINTS(...)` does not match
    /// `POINT`.
    pub fn sniff_wkt(input: &str) -> Option<Self> {
        let input = input.trim_start();
        Self::ALL.into_iter().find(|kind| {
            kind.wkt_tag().is_some_and(|tag| {
                input.strip_prefix(tag).is_some_and(|rest| {
                    rest.is_empty()
                        || rest.starts_with('(')
                        || rest.starts_with(char::is_whitespace)
                })
            })
        })
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = GeoShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GeoShapeError::UnrecognizedType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_tags() {
        for kind in GeometryType::ALL {
            assert_eq!(kind.as_str().parse::<GeometryType>().ok(), Some(kind));
        }

        assert_matches!(
            "Circulo".parse::<GeometryType>(),
            Err(GeoShapeError::UnrecognizedType(tag)) if tag == "Circulo"
        );
    }

    #[test]
    fn sniff() {
        assert_eq!(
            GeometryType::sniff_wkt("POINT(1 2)"),
            Some(GeometryType::Point)
        );
        assert_eq!(
            GeometryType::sniff_wkt("  MULTIPOINT EMPTY"),
            Some(GeometryType::MultiPoint)
        );
        assert_eq!(
            GeometryType::sniff_wkt("POLYGON((0 0, 1 1, 1 0))"),
            Some(GeometryType::Polygon)
        );
        assert_eq!(
            GeometryType::sniff_wkt("CIRCULARSTRING(1 0, 0 1, -1 0)"),
            Some(GeometryType::Circle)
        );
        assert_eq!(GeometryType::sniff_wkt("POINTS(1 2)"), None);
        assert_eq!(GeometryType::sniff_wkt("CIRFCRESOT(1.4 2.3)"), None);
    }
}
