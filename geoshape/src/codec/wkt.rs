//! Structural helpers of the text grammar: tags, parentheses and top-level splitting.

use crate::codec::points::scan_points;
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::Point;

/// Body of a tagged text value.
#[derive(Debug, PartialEq)]
pub(crate) enum Tagged<'a> {
    /// `<TAG> EMPTY`
    Empty,
    /// Everything after the tag, starting with `(`.
    Body(&'a str),
}

/// Strips the tag of `kind` from the input.
pub(crate) fn strip_tag(input: &str, kind: GeometryType) -> Result<Tagged<'_>, GeoShapeError> {
    let malformed = || GeoShapeError::malformed(kind.as_str(), input);
    let tag = kind.wkt_tag().ok_or_else(malformed)?;
    let rest = input
        .trim()
        .strip_prefix(tag)
        .ok_or_else(|| GeoShapeError::TypeMismatch {
            expected: kind,
            got: leading_token(input).to_string(),
        })?
        .trim_start();

    if rest == "EMPTY" {
        Ok(Tagged::Empty)
    } else if rest.starts_with('(') {
        Ok(Tagged::Body(rest))
    } else {
        Err(malformed())
    }
}

/// The tag-like leading part of a text value, used to report type mismatches.
fn leading_token(input: &str) -> &str {
    let input = input.trim_start();
    let end = input
        .find(|c: char| c == '(' || c.is_whitespace())
        .unwrap_or(input.len());
    &input[..end]
}

/// Removes one pair of parentheses enclosing the whole input.
pub(crate) fn unwrap_parens<'a>(
    input: &'a str,
    kind: &'static str,
) -> Result<&'a str, GeoShapeError> {
    let trimmed = input.trim();
    let malformed = || GeoShapeError::malformed(kind, input);
    if !trimmed.starts_with('(') || !trimmed.ends_with(')') {
        return Err(malformed());
    }

    let mut depth = 0usize;
    let last = trimmed.len() - 1;
    for (i, c) in trimmed.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(malformed)?;
                if depth == 0 && i != last {
                    return Err(malformed());
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(malformed());
    }

    Ok(&trimmed[1..last])
}

/// Splits the input at commas that are not enclosed in parentheses.
pub(crate) fn split_top_level<'a>(
    input: &'a str,
    kind: &'static str,
) -> Result<Vec<&'a str>, GeoShapeError> {
    let malformed = || GeoShapeError::malformed(kind, input);
    let mut parts = vec![];
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or_else(malformed)?,
            ',' if depth == 0 => {
                parts.push(input[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(malformed());
    }

    parts.push(input[start..].trim());
    Ok(parts)
}

/// Scans a parenthesized list of parenthesized point lists: `((x y, ...), (x y, ...))`.
pub(crate) fn scan_point_lists(
    input: &str,
    kind: &'static str,
) -> Result<Vec<Vec<Point>>, GeoShapeError> {
    let inner = unwrap_parens(input, kind)?;
    split_top_level(inner, kind)?
        .into_iter()
        .map(|list| scan_points(unwrap_parens(list, kind)?))
        .collect()
}
