/// Sphere the geographic coordinates are given on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    radius: f64,
}

impl Datum {
    /// Sphere with the mean Earth radius of 6 371 000 meters.
    pub const SPHERE: Self = Datum { radius: 6_371_000.0 };

    /// Radius of the sphere used for great-circle calculations, in meters.
    pub fn mean_radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::SPHERE
    }
}
