//! Three-phase tower geometry and per-kilometer line constants.
//!
//! Phase positions are `(x, height above ground)` in meters. Distances to the
//! ground-plane images are found by summing heights instead of subtracting
//! them. Inductance and capacitance assume a transposed, symmetric circuit
//! and ignore earth-return corrections.

use crate::bundle::ConductorBundle;
use crate::error::{GeometryError, GeometryResult};
use std::f64::consts::PI;
use tl_core::constants::{DEFAULT_FREQ_HZ, EPSILON_0_PER_KM, MU_0_PER_KM};
use tl_core::{ensure_finite, ensure_positive, geometric_mean};
use tracing::{debug, trace};

/// A point in the tower cross section: `(x, height)`, m.
pub type Point = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseLocations {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl PhaseLocations {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Horizontal configuration: phases at `-spacing`, `0`, `+spacing`, all at `height`.
    pub fn horizontal(spacing: f64, height: f64) -> Self {
        Self {
            a: (-spacing, height),
            b: (0.0, height),
            c: (spacing, height),
        }
    }

    pub fn heights(&self) -> [f64; 3] {
        [self.a.1, self.b.1, self.c.1]
    }
}

/// One value per phase pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDistances {
    pub ab: f64,
    pub ac: f64,
    pub bc: f64,
}

impl PhaseDistances {
    fn between(locations: &PhaseLocations, distance: fn(Point, Point) -> f64) -> Self {
        let PhaseLocations { a, b, c } = *locations;
        Self {
            ab: distance(a, b),
            ac: distance(a, c),
            bc: distance(b, c),
        }
    }

    pub fn values(&self) -> [f64; 3] {
        [self.ab, self.ac, self.bc]
    }
}

fn euclidean(p: Point, q: Point) -> f64 {
    (p.0 - q.0).hypot(p.1 - q.1)
}

fn mirrored(p: Point, q: Point) -> f64 {
    (p.0 - q.0).hypot(p.1 + q.1)
}

/// Raw tower inputs; [`TowerSpec::build`] produces a [`Tower`].
#[derive(Debug, Clone, PartialEq)]
pub struct TowerSpec {
    pub locations: PhaseLocations,
    pub bundle: ConductorBundle,
    pub circuits: u32,
    /// Hz
    pub freq: f64,
}

impl TowerSpec {
    pub fn new(locations: PhaseLocations, bundle: ConductorBundle) -> Self {
        Self {
            locations,
            bundle,
            circuits: 1,
            freq: DEFAULT_FREQ_HZ,
        }
    }

    pub fn circuits(mut self, circuits: u32) -> Self {
        self.circuits = circuits;
        self
    }

    pub fn freq(mut self, freq: f64) -> Self {
        self.freq = freq;
        self
    }

    pub fn build(self) -> GeometryResult<Tower> {
        if self.circuits != 1 {
            return Err(GeometryError::config(format!(
                "can't calculate geometry for multi-circuit lines yet (circuits = {})",
                self.circuits
            )));
        }
        let freq = ensure_positive(self.freq, "tower frequency")?;
        for (x, height) in [self.locations.a, self.locations.b, self.locations.c] {
            ensure_finite(x, "phase x coordinate")?;
            ensure_positive(height, "phase height")?;
        }

        let true_distance = PhaseDistances::between(&self.locations, euclidean);
        let reflected_distance = PhaseDistances::between(&self.locations, mirrored);
        trace!(?true_distance, ?reflected_distance, "phase distances");

        // 'Equivalent' distances are geometric means
        let equivalent_distance = ensure_positive(
            geometric_mean(&true_distance.values())?,
            "equivalent phase distance",
        )?;
        let equivalent_reflected_distance = geometric_mean(&reflected_distance.values())?;
        let equivalent_height = geometric_mean(&self.locations.heights())?;

        let resistance = self.bundle.resistance_per_km();
        let inductance = ensure_positive(
            MU_0_PER_KM / (2.0 * PI) * (equivalent_distance / self.bundle.spacing_l()).ln(),
            "inductance per km",
        )?;
        let capacitance = ensure_positive(
            (2.0 * PI * EPSILON_0_PER_KM)
                / ((equivalent_distance / self.bundle.spacing_c()).ln()
                    - (equivalent_reflected_distance / (2.0 * equivalent_height)).ln()),
            "capacitance per km",
        )?;
        debug!(
            equivalent_distance,
            equivalent_reflected_distance,
            equivalent_height,
            resistance,
            inductance,
            capacitance,
            "resolved tower"
        );

        Ok(Tower {
            locations: self.locations,
            bundle: self.bundle,
            circuits: self.circuits,
            freq,
            true_distance,
            reflected_distance,
            equivalent_distance,
            equivalent_reflected_distance,
            equivalent_height,
            resistance,
            inductance,
            capacitance,
        })
    }
}

/// A single-circuit tower with its per-kilometer electrical parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    locations: PhaseLocations,
    bundle: ConductorBundle,
    circuits: u32,
    freq: f64,
    true_distance: PhaseDistances,
    reflected_distance: PhaseDistances,
    equivalent_distance: f64,
    equivalent_reflected_distance: f64,
    equivalent_height: f64,
    resistance: f64,
    inductance: f64,
    capacitance: f64,
}

impl Tower {
    /// Single circuit at the default 60 Hz.
    pub fn new(locations: PhaseLocations, bundle: ConductorBundle) -> GeometryResult<Self> {
        TowerSpec::new(locations, bundle).build()
    }

    pub fn locations(&self) -> &PhaseLocations {
        &self.locations
    }

    pub fn bundle(&self) -> &ConductorBundle {
        &self.bundle
    }

    pub fn circuits(&self) -> u32 {
        self.circuits
    }

    /// Hz
    pub fn freq(&self) -> f64 {
        self.freq
    }

    pub fn true_distance(&self) -> &PhaseDistances {
        &self.true_distance
    }

    pub fn reflected_distance(&self) -> &PhaseDistances {
        &self.reflected_distance
    }

    pub fn equivalent_distance(&self) -> f64 {
        self.equivalent_distance
    }

    pub fn equivalent_reflected_distance(&self) -> f64 {
        self.equivalent_reflected_distance
    }

    pub fn equivalent_height(&self) -> f64 {
        self.equivalent_height
    }

    /// Series resistance, Ω/km.
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Series inductance, H/km.
    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    /// Shunt capacitance, F/km.
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }
}
