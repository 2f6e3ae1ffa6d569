//! Point-sequence routines shared by all geometry codecs.
//!
//! Every coordinate the crate reads or writes goes through this module, so numeric formatting and coordinate
//! tokenizing are defined in exactly one place.

use crate::error::GeoShapeError;
use crate::Point;

/// Writes a number in the shortest representation that parses back to the same value, without exponent.
pub(crate) fn write_number(out: &mut String, value: f64) {
    out.push_str(&value.to_string());
}

/// Writes the points as `prefix x0 y0, x1 y1, ... suffix`.
pub(crate) fn write_points(out: &mut String, points: &[Point], prefix: &str, suffix: &str) {
    out.push_str(prefix);
    for (i, point) in points.iter().enumerate() {
        if i != 0 {
            out.push_str(", ");
        }
        write_number(out, point.x());
        out.push(' ');
        write_number(out, point.y());
    }
    out.push_str(suffix);
}

/// Scans a list of points in the form `(x0 y0, x1 y1, x2 y2)`.
///
/// Any number of enclosing parentheses may already be stripped by the caller, and every pair may be wrapped in its
/// own parentheses (`(x0 y0), (x1 y1)`).
pub(crate) fn scan_points(input: &str) -> Result<Vec<Point>, GeoShapeError> {
    let list = input
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');
    if list.trim().is_empty() {
        return Err(GeoShapeError::malformed("point list", input));
    }

    list.split(',').map(|pair| scan_pair(pair, input)).collect()
}

fn scan_pair(pair: &str, input: &str) -> Result<Point, GeoShapeError> {
    let pair = pair.trim().trim_start_matches('(').trim_end_matches(')');
    let mut tokens = pair.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => Ok(Point::new(x.parse()?, y.parse()?)),
        _ => Err(GeoShapeError::malformed("point list", input)),
    }
}

/// Writes a number as a JSON value. JSON has no representation for NaN and infinities.
pub(crate) fn write_json_number(out: &mut String, value: f64) -> Result<(), GeoShapeError> {
    if !value.is_finite() {
        return Err(GeoShapeError::NonFinite(value));
    }
    write_number(out, value);
    Ok(())
}

/// Writes `[n0,n1,...]`.
pub(crate) fn write_json_numbers(out: &mut String, values: &[f64]) -> Result<(), GeoShapeError> {
    out.push('[');
    for (i, value) in values.iter().enumerate() {
        if i != 0 {
            out.push(',');
        }
        write_json_number(out, *value)?;
    }
    out.push(']');
    Ok(())
}

/// Writes `[x,y]`.
pub(crate) fn write_json_position(out: &mut String, point: &Point) -> Result<(), GeoShapeError> {
    write_json_numbers(out, &point.coords())
}

/// Writes `[[x0,y0],[x1,y1],...]`.
pub(crate) fn write_json_points(out: &mut String, points: &[Point]) -> Result<(), GeoShapeError> {
    write_json_list(out, points, write_json_position)
}

/// Writes `[item0,item1,...]` using `write_item` for every item.
pub(crate) fn write_json_list<T>(
    out: &mut String,
    items: &[T],
    mut write_item: impl FnMut(&mut String, &T) -> Result<(), GeoShapeError>,
) -> Result<(), GeoShapeError> {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            out.push(',');
        }
        write_item(out, item)?;
    }
    out.push(']');
    Ok(())
}

/// Converts a GeoJSON position into a point.
///
/// A position must have at least two ordinates. Any further ordinates (altitude etc.) are dropped.
pub(crate) fn point_from_position(position: &[f64]) -> Result<Point, GeoShapeError> {
    match position {
        [x, y] => Ok(Point::new(*x, *y)),
        [x, y, rest @ ..] => {
            log::debug!("Dropping {} extra ordinates of position", rest.len());
            Ok(Point::new(*x, *y))
        }
        _ => Err(GeoShapeError::malformed(
            "position",
            &format!("{position:?}"),
        )),
    }
}

/// Converts a list of GeoJSON positions into points.
pub(crate) fn points_from_positions(positions: &[Vec<f64>]) -> Result<Vec<Point>, GeoShapeError> {
    positions
        .iter()
        .map(|position| point_from_position(position))
        .collect()
}
