use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;
use crate::Point;

/// Axis-aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum X.
    pub x_min: f64,
    /// Minimum Y.
    pub y_min: f64,
    /// Maximum X.
    pub x_max: f64,
    /// Maximum Y.
    pub y_max: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Degenerate rectangle around a single point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = f64>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Bounding rectangle of the points. Returns `None` for an empty iterator.
    pub fn from_points<'a>(mut points: impl Iterator<Item = &'a Point>) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |rect, p| {
            rect.merge(Self::from_point(p))
        }))
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Flat `[x_min, y_min, x_max, y_max]` array, the layout of the GeoJSON `bbox` member.
    pub fn to_bbox(&self) -> Vec<f64> {
        vec![self.x_min, self.y_min, self.x_max, self.y_max]
    }
}
