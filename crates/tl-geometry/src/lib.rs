//! tl-geometry: overhead line constants from tower geometry.
//!
//! Provides:
//! - Conductor material tables (relative permeability, resistivity)
//! - `Conductor`: GMR and resistance, given or derived from material
//! - `ConductorBundle`: equivalent spacings for 2, 3 and 4 conductor bundles
//! - `Tower`: per-km resistance, inductance and shunt capacitance of a
//!   single symmetric three-phase circuit
//! - `LineSegment`: lumped R, X, B for a given length, optionally per-unit
//!
//! Every type is resolved once from raw inputs and is immutable afterwards.
//!
//! # Example
//!
//! ```
//! use tl_geometry::{BundleSpec, ConductorSpec, LineSegment, PhaseLocations, Tower};
//! use tl_core::units::{ft, mi};
//!
//! let conductor = ConductorSpec::new(0.01519)
//!     .gmr(0.012253)
//!     .resistance_per_km(0.0672)
//!     .resolve()
//!     .unwrap();
//! let bundle = BundleSpec::new(2, ft(1.5).value, conductor).build().unwrap();
//! let locations = PhaseLocations::horizontal(ft(24.0).value, ft(90.0).value);
//! let tower = Tower::new(locations, bundle).unwrap();
//!
//! let segment = LineSegment::new(&tower, mi(50.0)).unwrap();
//! println!("X = {:.1} ohm", segment.series_reactance().value);
//! ```

pub mod bundle;
pub mod conductor;
pub mod error;
pub mod line;
pub mod materials;
pub mod tower;

// Re-exports
pub use bundle::{BundleArrangement, BundleLayout, BundleSpec, ConductorBundle, SpacingKind};
pub use conductor::{Conductor, ConductorSpec};
pub use error::{GeometryError, GeometryResult};
pub use line::{LineSegment, PerUnitImpedance};
pub use materials::MaterialEntry;
pub use tower::{PhaseDistances, PhaseLocations, Point, Tower, TowerSpec};
