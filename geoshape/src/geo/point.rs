use num_traits::Float;

use crate::geo::{Datum, DistanceMethod};

/// A point on the surface of a celestial body, in degrees.
pub trait GeoPoint {
    /// Numeric type of the coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Great-circle distance to the other point in meters.
    ///
    /// Returns `None` if the radius of the datum cannot be represented by `Self::Num`.
    fn distance(
        &self,
        other: &impl GeoPoint<Num = Self::Num>,
        method: DistanceMethod,
        datum: &Datum,
    ) -> Option<Self::Num>
    where
        Self: Sized,
    {
        method.distance(self, other, datum)
    }
}
