//! Types and functions on geometries in cartesian coordinates.

mod cartesian_point;
mod orient;
mod rect;

pub use cartesian_point::CartesianPoint2d;
pub use orient::Orientation;
pub use rect::Rect;
