//! Error type used by the crate.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::geometry_type::GeometryType;

/// Error enum.
///
/// All decode and encode failures are reported through this type. None of them are retryable: the input has to be
/// fixed.
#[derive(Debug, Error)]
pub enum GeoShapeError {
    /// Input text does not match the expected grammar.
    #[error("malformed {kind}: {input}")]
    Malformed {
        /// What was being decoded.
        kind: &'static str,
        /// Offending fragment of the input.
        input: String,
    },

    /// Declared `type` tag does not match the decoder being invoked.
    #[error("expected type {expected}, got {got}")]
    TypeMismatch {
        /// Tag the decoder accepts.
        expected: GeometryType,
        /// Tag found in the input.
        got: String,
    },

    /// Type tag is not one of the known geometry types.
    #[error("unrecognized geometry type: {0}")]
    UnrecognizedType(String),

    /// Coordinate token is not a valid number.
    #[error("invalid number: {0}")]
    NumericParse(#[from] ParseFloatError),

    /// `scan` was invoked with a value that is neither text nor bytes.
    #[error("could not scan geometry from {0}")]
    UnsupportedSourceKind(&'static str),

    /// Input is not valid JSON or has a wrong JSON shape.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoding of a nested member failed.
    #[error("could not decode {kind}{}: {source}", member_suffix(.index))]
    Nested {
        /// Type of the enclosing geometry.
        kind: GeometryType,
        /// Position of the failing member in the enclosing collection.
        index: Option<usize>,
        /// The failure of the member.
        source: Box<GeoShapeError>,
    },

    /// A polygon ring has fewer points than strict validation requires.
    #[error("ring {ring} has {points} points, at least 3 are required")]
    InvalidRing {
        /// Index of the ring inside its polygon.
        ring: usize,
        /// Number of points in the ring.
        points: usize,
    },

    /// NaN and infinite values cannot be represented in JSON.
    #[error("non-finite number {0} cannot be encoded")]
    NonFinite(f64),

    /// Conversion to or from another geometry library failed.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}

impl GeoShapeError {
    pub(crate) fn malformed(kind: &'static str, input: &str) -> Self {
        Self::Malformed {
            kind,
            input: input.to_string(),
        }
    }

    pub(crate) fn nested(kind: GeometryType, index: Option<usize>, source: GeoShapeError) -> Self {
        Self::Nested {
            kind,
            index,
            source: Box::new(source),
        }
    }
}

fn member_suffix(index: &Option<usize>) -> String {
    match index {
        Some(index) => format!(" member {index}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_message_names_member() {
        let err = GeoShapeError::nested(
            GeometryType::GeometryCollection,
            Some(2),
            GeoShapeError::UnrecognizedType("Circulo".into()),
        );
        assert_eq!(
            err.to_string(),
            "could not decode GeometryCollection member 2: unrecognized geometry type: Circulo"
        );

        let err = GeoShapeError::nested(
            GeometryType::Feature,
            None,
            GeoShapeError::UnsupportedSourceKind("integer"),
        );
        assert_eq!(
            err.to_string(),
            "could not decode Feature: could not scan geometry from integer"
        );
    }
}
