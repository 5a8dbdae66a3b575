//! Error types for line geometry construction.

use tl_core::TlError;
use thiserror::Error;

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised while resolving conductors, bundles, and towers.
///
/// Every variant is produced at construction time; no partially built value
/// ever escapes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Inputs are insufficient or contradictory.
    #[error("Configuration error: {what}")]
    Config { what: String },

    /// Material name missing from the table needed for a derivation.
    #[error("Unknown {property} for material '{material}', can't calculate {derived}")]
    UnknownMaterial {
        material: String,
        property: &'static str,
        derived: &'static str,
    },

    /// Geometry the formulas do not cover.
    #[error("Not supported: {what}")]
    Unsupported { what: String },

    /// Non-finite or non-positive input or result.
    #[error("Non-physical value: {0}")]
    NonPhysical(#[from] TlError),
}

impl GeometryError {
    pub(crate) fn config(what: impl Into<String>) -> Self {
        GeometryError::Config { what: what.into() }
    }

    pub(crate) fn unsupported(what: impl Into<String>) -> Self {
        GeometryError::Unsupported { what: what.into() }
    }

    /// True for errors the caller fixes by supplying different inputs
    /// (missing data, unknown material, unknown layout, circuit count).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GeometryError::Config { .. } | GeometryError::UnknownMaterial { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeometryError::UnknownMaterial {
            material: "unobtainium".into(),
            property: "permeability",
            derived: "gmr",
        };
        let msg = err.to_string();
        assert!(msg.contains("unobtainium"));
        assert!(msg.contains("gmr"));

        let err = GeometryError::unsupported("bundles of 5 conductors");
        assert!(err.to_string().contains("5 conductors"));
    }

    #[test]
    fn configuration_classification() {
        assert!(GeometryError::config("x").is_configuration());
        assert!(
            GeometryError::UnknownMaterial {
                material: "x".into(),
                property: "resistivity",
                derived: "resistance",
            }
            .is_configuration()
        );
        assert!(!GeometryError::unsupported("x").is_configuration());

        let core: GeometryError = TlError::NonPositive {
            what: "radius",
            value: 0.0,
        }
        .into();
        assert!(!core.is_configuration());
    }
}
