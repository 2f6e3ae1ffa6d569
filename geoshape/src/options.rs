//! Decoder configuration.

use serde::{Deserialize, Serialize};

use crate::circle::CircleContainment;
use crate::error::GeoShapeError;
use crate::Point;

/// How strictly polygon rings are validated when decoding.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RingValidation {
    /// Any ring with at least one point is accepted.
    #[default]
    Lenient,
    /// Every ring must have at least 3 points, otherwise [`GeoShapeError::InvalidRing`](crate::GeoShapeError)
    /// is returned.
    Strict,
}

impl RingValidation {
    /// Minimum number of points in a ring.
    pub fn min_points(&self) -> usize {
        match self {
            Self::Lenient => 1,
            Self::Strict => 3,
        }
    }

    /// Checks that every ring has at least [`RingValidation::min_points`] points.
    pub(crate) fn check(&self, rings: &[Vec<Point>]) -> Result<(), GeoShapeError> {
        match rings
            .iter()
            .enumerate()
            .find(|(_, ring)| ring.len() < self.min_points())
        {
            Some((ring, points)) => Err(GeoShapeError::InvalidRing {
                ring,
                points: points.len(),
            }),
            None => Ok(()),
        }
    }
}

/// Options applied by all decoders of the crate.
///
/// Decoders that do not take options explicitly use [`DecodeOptions::default`].
///
/// ```
/// use geoshape::{DecodeOptions, RingValidation, FromWkt, Polygon, GeoShapeError};
///
/// let options = DecodeOptions::default().with_ring_validation(RingValidation::Strict);
/// let result = Polygon::from_wkt_with("POLYGON((0 0, 1 1))", &options);
/// assert!(matches!(result, Err(GeoShapeError::InvalidRing { ring: 0, points: 2 })));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Validation of polygon rings.
    pub ring_validation: RingValidation,
    /// Containment strategy given to decoded circles.
    pub circle_containment: CircleContainment,
}

impl DecodeOptions {
    /// Sets ring validation level.
    pub fn with_ring_validation(mut self, ring_validation: RingValidation) -> Self {
        self.ring_validation = ring_validation;
        self
    }

    /// Sets containment strategy of decoded circles.
    pub fn with_circle_containment(mut self, circle_containment: CircleContainment) -> Self {
        self.circle_containment = circle_containment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::RadiusUnit;
    use crate::geo::DistanceMethod;

    #[test]
    fn ring_check() {
        let rings = vec![
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        ];
        assert!(RingValidation::Lenient.check(&rings).is_ok());
        assert!(matches!(
            RingValidation::Strict.check(&rings),
            Err(GeoShapeError::InvalidRing { ring: 1, points: 2 })
        ));
        assert!(RingValidation::Strict.check(&[]).is_ok());
    }

    #[test]
    fn deserialize_partial() {
        let options: DecodeOptions =
            serde_json::from_str(r#"{"ring_validation":"Strict"}"#).expect("valid options");
        assert_eq!(options.ring_validation, RingValidation::Strict);
        assert_eq!(options.circle_containment, CircleContainment::default());

        let options: DecodeOptions = serde_json::from_str(
            r#"{"circle_containment":{"method":"Equirectangular","unit":"Meters"}}"#,
        )
        .expect("valid options");
        assert_eq!(options.ring_validation, RingValidation::Lenient);
        assert_eq!(
            options.circle_containment,
            CircleContainment::new(DistanceMethod::Equirectangular, RadiusUnit::Meters)
        );
    }
}
