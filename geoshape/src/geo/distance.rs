use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::geo::{Datum, GeoPoint};

/// Approximation used to calculate the great-circle distance between two geographic points.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceMethod {
    /// Haversine formula. Accurate for all distances.
    #[default]
    Haversine,
    /// Spherical law of cosines. Loses precision for very short distances.
    SphericalLawOfCosines,
    /// Pythagoras on an equirectangular projection. Fastest, good for short distances away from the poles.
    Equirectangular,
}

impl DistanceMethod {
    /// Distance between the points along the surface of the datum sphere, in meters.
    ///
    /// Returns `None` if the radius of the datum cannot be represented by `N`.
    pub fn distance<N: Float>(
        &self,
        a: &impl GeoPoint<Num = N>,
        b: &impl GeoPoint<Num = N>,
        datum: &Datum,
    ) -> Option<N> {
        let radius = N::from(datum.mean_radius())?;
        let two = N::one() + N::one();

        let lat_a = a.lat_rad();
        let lat_b = b.lat_rad();
        let d_lat = lat_b - lat_a;
        let d_lon = b.lon_rad() - a.lon_rad();

        let angle = match self {
            Self::Haversine => {
                let h = (d_lat / two).sin().powi(2)
                    + lat_a.cos() * lat_b.cos() * (d_lon / two).sin().powi(2);
                two * h.sqrt().min(N::one()).asin()
            }
            Self::SphericalLawOfCosines => {
                let cos = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * d_lon.cos();
                cos.max(-N::one()).min(N::one()).acos()
            }
            Self::Equirectangular => {
                let x = d_lon * ((lat_a + lat_b) / two).cos();
                x.hypot(d_lat)
            }
        };

        Some(angle * radius)
    }
}
