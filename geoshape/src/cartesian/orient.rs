use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    ///
    /// Returns `None` if any of the coordinates is NaN.
    pub fn triplet<P: CartesianPoint2d>(
        p: &P,
        q: &impl CartesianPoint2d<Num = P::Num>,
        r: &impl CartesianPoint2d<Num = P::Num>,
    ) -> Option<Self> {
        let zero = P::Num::zero();
        match (q.y() - p.y()) * (r.x() - q.x()) - (q.x() - p.x()) * (r.y() - q.y()) {
            v if v == zero => Some(Self::Collinear),
            v if v > zero => Some(Self::Clockwise),
            v if v < zero => Some(Self::Counterclockwise),
            _ => None,
        }
    }
}
