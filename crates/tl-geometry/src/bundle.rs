//! Conductor bundles: `n` identical sub-conductors acting as one phase conductor.

use crate::conductor::Conductor;
use crate::error::{GeometryError, GeometryResult};
use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;
use tl_core::ensure_positive;
use tracing::debug;

/// How sub-conductors of a 3- or 4-conductor bundle are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BundleLayout {
    /// Vertices of a regular polygon.
    #[default]
    Circular,
    /// Evenly spaced on a horizontal line.
    Flat,
}

impl BundleLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            BundleLayout::Circular => "circular",
            BundleLayout::Flat => "flat",
        }
    }
}

impl fmt::Display for BundleLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BundleLayout {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circular" => Ok(BundleLayout::Circular),
            "flat" => Ok(BundleLayout::Flat),
            _ => Err(GeometryError::config(format!("Unknown layout: {s}"))),
        }
    }
}

/// Which conductor distance feeds the equivalent spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingKind {
    /// Uses the conductor GMR.
    Inductance,
    /// Uses the conductor outer radius.
    Capacitance,
}

/// Supported (count, layout) combinations, each with its own closed-form
/// equivalent spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleArrangement {
    Pair,
    CircularTriple,
    CircularQuad,
    FlatTriple,
    FlatQuad,
}

impl BundleArrangement {
    /// Pick the arrangement for `n` conductors.
    ///
    /// The layout name is ignored for pairs. For any other count an unknown
    /// layout is reported before an unsupported count.
    pub fn select(n: usize, layout: &str) -> GeometryResult<Self> {
        if n == 2 {
            return Ok(BundleArrangement::Pair);
        }
        let layout: BundleLayout = layout.parse()?;
        match (n, layout) {
            (3, BundleLayout::Circular) => Ok(BundleArrangement::CircularTriple),
            (4, BundleLayout::Circular) => Ok(BundleArrangement::CircularQuad),
            (3, BundleLayout::Flat) => Ok(BundleArrangement::FlatTriple),
            (4, BundleLayout::Flat) => Ok(BundleArrangement::FlatQuad),
            (n, layout) => Err(GeometryError::unsupported(format!(
                "equivalent spacing for {layout} bundles of {n} conductors (supported: 2, 3, 4)"
            ))),
        }
    }

    pub fn conductor_count(self) -> usize {
        match self {
            BundleArrangement::Pair => 2,
            BundleArrangement::CircularTriple | BundleArrangement::FlatTriple => 3,
            BundleArrangement::CircularQuad | BundleArrangement::FlatQuad => 4,
        }
    }

    /// Equivalent bundle spacing from a conductor distance (GMR or radius)
    /// and the center-to-center spacing of adjacent sub-conductors.
    pub fn equivalent_spacing(self, conductor_distance: f64, spacing: f64) -> f64 {
        let d = conductor_distance;
        let s = spacing;
        match self {
            BundleArrangement::Pair => (d * s).sqrt(),
            BundleArrangement::CircularTriple => (d * s.powi(2)).cbrt(),
            BundleArrangement::CircularQuad => (d * s.powi(3) * SQRT_2).powf(0.25),
            BundleArrangement::FlatTriple => (d * 2.0 * s.powi(2)).cbrt(),
            BundleArrangement::FlatQuad => (d * 12.0 * s.powi(3)).powf(0.125),
        }
    }
}

/// Raw bundle inputs; [`BundleSpec::build`] produces a [`ConductorBundle`].
#[derive(Debug, Clone, PartialEq)]
pub struct BundleSpec {
    pub n: usize,
    /// Center-to-center distance between adjacent sub-conductors, m
    pub spacing: f64,
    pub conductor: Conductor,
    /// `"circular"` (default) or `"flat"`
    pub layout: String,
}

impl BundleSpec {
    pub fn new(n: usize, spacing: f64, conductor: Conductor) -> Self {
        Self {
            n,
            spacing,
            conductor,
            layout: BundleLayout::default().as_str().to_string(),
        }
    }

    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn build(self) -> GeometryResult<ConductorBundle> {
        let spacing = ensure_positive(self.spacing, "bundle spacing")?;
        let arrangement = BundleArrangement::select(self.n, &self.layout)?;

        let resistance_per_km = self.conductor.resistance_per_km() / self.n as f64;
        let spacing_l = arrangement.equivalent_spacing(self.conductor.gmr(), spacing);
        let spacing_c = arrangement.equivalent_spacing(self.conductor.radius(), spacing);
        debug!(
            n = self.n,
            ?arrangement,
            resistance_per_km,
            spacing_l,
            spacing_c,
            "resolved conductor bundle"
        );

        Ok(ConductorBundle {
            n: self.n,
            spacing,
            conductor: self.conductor,
            layout: self.layout,
            arrangement,
            resistance_per_km,
            spacing_l,
            spacing_c,
        })
    }
}

/// Resolved bundle with its equivalent spacings.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductorBundle {
    n: usize,
    spacing: f64,
    conductor: Conductor,
    layout: String,
    arrangement: BundleArrangement,
    resistance_per_km: f64,
    spacing_l: f64,
    spacing_c: f64,
}

impl ConductorBundle {
    pub fn new(
        n: usize,
        spacing: f64,
        conductor: Conductor,
        layout: BundleLayout,
    ) -> GeometryResult<Self> {
        BundleSpec::new(n, spacing, conductor)
            .layout(layout.as_str())
            .build()
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn conductor(&self) -> &Conductor {
        &self.conductor
    }

    /// Layout name as supplied (not interpreted for pairs).
    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn arrangement(&self) -> BundleArrangement {
        self.arrangement
    }

    /// Parallel sub-conductors share current equally, Ω/km.
    pub fn resistance_per_km(&self) -> f64 {
        self.resistance_per_km
    }

    /// Equivalent spacing for inductance (from GMR), m.
    pub fn spacing_l(&self) -> f64 {
        self.spacing_l
    }

    /// Equivalent spacing for capacitance (from radius), m.
    pub fn spacing_c(&self) -> f64 {
        self.spacing_c
    }

    pub fn equivalent_spacing(&self, kind: SpacingKind) -> f64 {
        match kind {
            SpacingKind::Inductance => self.spacing_l,
            SpacingKind::Capacitance => self.spacing_c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conductor::ConductorSpec;
    use tl_core::{Tolerances, nearly_equal};

    fn cardinal() -> Conductor {
        ConductorSpec::new(0.01519)
            .gmr(0.012253)
            .material("ACSR")
            .resistance_per_km(0.023)
            .resolve()
            .unwrap()
    }

    #[test]
    fn pair_and_circular_triple_match_regular_polygon_formula() {
        let spacing = 0.4572;
        let conductor = cardinal();
        let tol = Tolerances::default();
        for n in [2_usize, 3] {
            let bundle = BundleSpec::new(n, spacing, conductor.clone()).build().unwrap();
            let exponent = 1.0 / n as f64;
            assert_eq!(
                bundle.resistance_per_km(),
                conductor.resistance_per_km() / n as f64
            );
            assert!(nearly_equal(
                bundle.spacing_l(),
                (conductor.gmr() * spacing.powi(n as i32 - 1)).powf(exponent),
                tol
            ));
            assert!(nearly_equal(
                bundle.spacing_c(),
                (conductor.radius() * spacing.powi(n as i32 - 1)).powf(exponent),
                tol
            ));
        }
    }

    #[test]
    fn pair_ignores_layout_even_unknown() {
        let conductor = cardinal();
        let flat = ConductorBundle::new(2, 0.4, conductor.clone(), BundleLayout::Flat).unwrap();
        let odd = BundleSpec::new(2, 0.4, conductor.clone())
            .layout("hexagonal")
            .build()
            .unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(flat.spacing_l(), (conductor.gmr() * 0.4).sqrt(), tol));
        assert!(nearly_equal(flat.spacing_c(), (conductor.radius() * 0.4).sqrt(), tol));
        assert_eq!(flat.spacing_l(), odd.spacing_l());
        assert_eq!(odd.arrangement(), BundleArrangement::Pair);
        assert_eq!(odd.layout(), "hexagonal");
    }

    #[test]
    fn circular_and_flat_differ_for_three_and_four() {
        let conductor = cardinal();
        for n in [3_usize, 4] {
            let circular =
                ConductorBundle::new(n, 0.45, conductor.clone(), BundleLayout::Circular).unwrap();
            let flat = ConductorBundle::new(n, 0.45, conductor.clone(), BundleLayout::Flat).unwrap();
            assert_ne!(circular.spacing_l(), flat.spacing_l());
            assert_ne!(circular.spacing_c(), flat.spacing_c());
            assert_eq!(circular.resistance_per_km(), flat.resistance_per_km());
        }
    }

    #[test]
    fn quad_formulas() {
        let tol = Tolerances::default();
        let d = 0.01;
        let s = 0.45;
        assert!(nearly_equal(
            BundleArrangement::CircularQuad.equivalent_spacing(d, s),
            (d * s.powi(3) * 2f64.sqrt()).powf(0.25),
            tol
        ));
        assert!(nearly_equal(
            BundleArrangement::FlatQuad.equivalent_spacing(d, s),
            (d * 12.0 * s.powi(3)).powf(1.0 / 8.0),
            tol
        ));
        assert!(nearly_equal(
            BundleArrangement::FlatTriple.equivalent_spacing(d, s),
            (d * 2.0 * s * s).powf(1.0 / 3.0),
            tol
        ));
    }

    #[test]
    fn unsupported_counts() {
        for n in [0_usize, 1, 5, 8] {
            let err = BundleSpec::new(n, 0.45, cardinal()).build().unwrap_err();
            assert!(matches!(err, GeometryError::Unsupported { .. }), "n = {n}");
        }
    }

    #[test]
    fn unknown_layout_is_configuration_error() {
        let err = BundleSpec::new(3, 0.45, cardinal())
            .layout("triangle")
            .build()
            .unwrap_err();
        assert!(matches!(err, GeometryError::Config { ref what } if what.contains("triangle")));

        // Layout is checked before the conductor count
        let err = BundleSpec::new(5, 0.45, cardinal())
            .layout("triangle")
            .build()
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn layout_parsing() {
        assert_eq!("Flat".parse::<BundleLayout>().unwrap(), BundleLayout::Flat);
        assert_eq!(" circular ".parse::<BundleLayout>().unwrap(), BundleLayout::Circular);
        assert_eq!(BundleLayout::Flat.to_string(), "flat");
        assert!("".parse::<BundleLayout>().is_err());
    }

    #[test]
    fn rejects_non_positive_spacing() {
        let err = BundleSpec::new(2, 0.0, cardinal()).build().unwrap_err();
        assert!(matches!(err, GeometryError::NonPhysical(_)));
    }

    #[test]
    fn equivalent_spacing_by_kind() {
        let bundle = BundleSpec::new(4, 0.45, cardinal()).build().unwrap();
        assert_eq!(bundle.equivalent_spacing(SpacingKind::Inductance), bundle.spacing_l());
        assert_eq!(bundle.equivalent_spacing(SpacingKind::Capacitance), bundle.spacing_c());
        assert_eq!(bundle.arrangement().conductor_count(), bundle.n());
        // GMR < radius, so the inductance spacing is the smaller one
        assert!(bundle.spacing_l() < bundle.spacing_c());
    }
}
