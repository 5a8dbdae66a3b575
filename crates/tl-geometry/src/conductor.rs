//! Single conductor strand: geometric mean radius and DC resistance.

use crate::error::{GeometryError, GeometryResult};
use crate::materials;
use std::f64::consts::PI;
use tl_core::ensure_positive;
use tracing::debug;

/// Raw conductor inputs, resolved into a [`Conductor`] by [`ConductorSpec::resolve`].
///
/// GMR and resistance may be given directly (typical for stranded conductors
/// with datasheet values) or derived from the material tables for a solid
/// round conductor.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductorSpec {
    /// Outer radius, m
    pub radius: f64,
    pub material: Option<String>,
    /// Ω/km
    pub resistance_per_km: Option<f64>,
    /// Geometric mean radius, m
    pub gmr: Option<f64>,
    /// Current-carrying cross section, m²
    pub area: Option<f64>,
}

impl ConductorSpec {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            material: None,
            resistance_per_km: None,
            gmr: None,
            area: None,
        }
    }

    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn resistance_per_km(mut self, resistance_per_km: f64) -> Self {
        self.resistance_per_km = Some(resistance_per_km);
        self
    }

    pub fn gmr(mut self, gmr: f64) -> Self {
        self.gmr = Some(gmr);
        self
    }

    pub fn area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    /// Validate the inputs and derive whatever is missing.
    ///
    /// # Errors
    ///
    /// - `Config` if GMR or resistance is absent and no material is given.
    /// - `UnknownMaterial` if a derivation needs a material the tables lack.
    /// - `NonPhysical` for non-finite or non-positive numbers.
    pub fn resolve(self) -> GeometryResult<Conductor> {
        let radius = ensure_positive(self.radius, "conductor radius")?;
        if let Some(gmr) = self.gmr {
            ensure_positive(gmr, "conductor gmr")?;
        }
        if let Some(r) = self.resistance_per_km {
            ensure_positive(r, "conductor resistance per km")?;
        }
        if let Some(area) = self.area {
            ensure_positive(area, "conductor area")?;
        }

        if self.gmr.is_none() && self.material.is_none() {
            return Err(GeometryError::config(
                "if gmr is not provided, material and radius are needed to estimate it",
            ));
        }
        if self.resistance_per_km.is_none() && self.material.is_none() {
            return Err(GeometryError::config(
                "if resistance_per_km is not provided, material and radius are needed to estimate it",
            ));
        }

        let mut permeability = None;
        let gmr = match self.gmr {
            Some(gmr) => gmr,
            None => {
                let material = self.material.as_deref().unwrap_or_default();
                let mu_r = materials::relative_permeability(material).ok_or_else(|| {
                    GeometryError::UnknownMaterial {
                        material: material.to_string(),
                        property: "permeability",
                        derived: "gmr",
                    }
                })?;
                permeability = Some(mu_r);
                let gmr = radius * (mu_r / 4.0).exp();
                debug!(material, mu_r, gmr, "derived conductor gmr from material");
                gmr
            }
        };

        let mut resistivity = None;
        let mut area = self.area;
        let resistance_per_km = match self.resistance_per_km {
            Some(r) => r,
            None => {
                let material = self.material.as_deref().unwrap_or_default();
                let rho = materials::resistivity(material).ok_or_else(|| {
                    GeometryError::UnknownMaterial {
                        material: material.to_string(),
                        property: "resistivity",
                        derived: "resistance",
                    }
                })?;
                resistivity = Some(rho);
                // Solid round cross section unless told otherwise
                let a = *area.get_or_insert(PI * radius.powi(2));
                // Ω·m over m² is Ω per meter of length
                let r = rho * 1_000.0 / a;
                debug!(material, rho, area = a, r, "derived conductor resistance from material");
                r
            }
        };

        Ok(Conductor {
            radius,
            material: self.material,
            resistance_per_km,
            gmr,
            area,
            permeability,
            resistivity,
        })
    }
}

/// Fully resolved conductor. GMR and resistance are always concrete.
#[derive(Debug, Clone, PartialEq)]
pub struct Conductor {
    radius: f64,
    material: Option<String>,
    resistance_per_km: f64,
    gmr: f64,
    area: Option<f64>,
    permeability: Option<f64>,
    resistivity: Option<f64>,
}

impl Conductor {
    /// Solid conductor with both GMR and resistance taken from the material tables.
    pub fn solid(radius: f64, material: impl Into<String>) -> GeometryResult<Self> {
        ConductorSpec::new(radius).material(material).resolve()
    }

    /// Outer radius, m.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Ω/km.
    pub fn resistance_per_km(&self) -> f64 {
        self.resistance_per_km
    }

    /// Geometric mean radius, m.
    pub fn gmr(&self) -> f64 {
        self.gmr
    }

    /// Cross section in m²; set when given or when resistance was derived.
    pub fn area(&self) -> Option<f64> {
        self.area
    }

    /// Relative permeability; set only when GMR was derived.
    pub fn permeability(&self) -> Option<f64> {
        self.permeability
    }

    /// Resistivity in Ω·m; set only when resistance was derived.
    pub fn resistivity(&self) -> Option<f64> {
        self.resistivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tl_core::{Tolerances, nearly_equal};

    #[test]
    fn explicit_values_pass_through() {
        let c = ConductorSpec::new(0.01519)
            .gmr(0.012253)
            .material("ACSR")
            .resistance_per_km(0.0672)
            .resolve()
            .unwrap();
        assert_eq!(c.gmr(), 0.012253);
        assert_eq!(c.resistance_per_km(), 0.0672);
        assert_eq!(c.material(), Some("ACSR"));
        assert_eq!(c.permeability(), None);
        assert_eq!(c.resistivity(), None);
        assert_eq!(c.area(), None);
    }

    #[test]
    fn derives_gmr_and_resistance_from_material() {
        let radius = 0.01;
        let c = Conductor::solid(radius, "aluminum").unwrap();
        let mu_r = materials::relative_permeability("aluminum").unwrap();
        let rho = materials::resistivity("aluminum").unwrap();
        let area = PI * radius * radius;
        let tol = Tolerances::default();

        assert!(nearly_equal(c.gmr(), radius * (mu_r / 4.0).exp(), tol));
        assert!(nearly_equal(c.area().unwrap(), area, tol));
        assert!(nearly_equal(c.resistance_per_km(), rho * 1000.0 / area, tol));
        assert_eq!(c.permeability(), Some(mu_r));
        assert_eq!(c.resistivity(), Some(rho));
    }

    #[test]
    fn explicit_area_overrides_solid_cross_section() {
        let solid = Conductor::solid(0.01, "copper").unwrap();
        let partial = ConductorSpec::new(0.01)
            .material("copper")
            .area(PI * 0.01 * 0.01 / 2.0)
            .resolve()
            .unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(
            partial.resistance_per_km(),
            2.0 * solid.resistance_per_km(),
            tol
        ));
    }

    #[test]
    fn missing_everything_is_configuration_error() {
        let err = ConductorSpec::new(0.01).resolve().unwrap_err();
        assert!(matches!(err, GeometryError::Config { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn missing_resistance_source_is_configuration_error() {
        let err = ConductorSpec::new(0.01).gmr(0.008).resolve().unwrap_err();
        assert!(matches!(err, GeometryError::Config { ref what } if what.contains("resistance")));
    }

    #[test]
    fn unknown_material_needed_for_gmr() {
        let err = ConductorSpec::new(0.01)
            .material("ACSR")
            .resistance_per_km(0.05)
            .resolve()
            .unwrap_err();
        assert!(matches!(
            err,
            GeometryError::UnknownMaterial {
                property: "permeability",
                ..
            }
        ));
    }

    #[test]
    fn unknown_material_needed_for_resistance() {
        let err = ConductorSpec::new(0.01)
            .material("ACSR")
            .gmr(0.008)
            .resolve()
            .unwrap_err();
        assert!(matches!(
            err,
            GeometryError::UnknownMaterial {
                property: "resistivity",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_physical_inputs() {
        let err = ConductorSpec::new(0.0).material("copper").resolve().unwrap_err();
        assert!(matches!(err, GeometryError::NonPhysical(_)));

        let err = ConductorSpec::new(0.01)
            .material("copper")
            .area(-1.0)
            .resolve()
            .unwrap_err();
        assert!(matches!(err, GeometryError::NonPhysical(_)));

        let err = ConductorSpec::new(f64::NAN).material("copper").resolve().unwrap_err();
        assert!(matches!(err, GeometryError::NonPhysical(_)));
    }
}
