//! Scaling per-km tower constants to a line segment of given length.

use crate::error::GeometryResult;
use crate::tower::Tower;
use std::f64::consts::PI;
use tl_core::units::{Conductance, Length, Power, Resistance, Voltage, ohm, siemens, to_km};
use tl_core::ensure_positive;
use uom::si::electric_potential::kilovolt;
use uom::si::power::megawatt;

/// Lumped series impedance and shunt admittance of one line segment
/// at the tower's frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    length_km: f64,
    freq: f64,
    series_resistance: Resistance,
    series_reactance: Resistance,
    shunt_susceptance: Conductance,
}

impl LineSegment {
    pub fn new(tower: &Tower, length: Length) -> GeometryResult<Self> {
        let length_km = ensure_positive(to_km(length), "line length")?;
        let omega = 2.0 * PI * tower.freq();
        Ok(Self {
            length_km,
            freq: tower.freq(),
            series_resistance: ohm(tower.resistance() * length_km),
            series_reactance: ohm(omega * tower.inductance() * length_km),
            shunt_susceptance: siemens(omega * tower.capacitance() * length_km),
        })
    }

    pub fn length_km(&self) -> f64 {
        self.length_km
    }

    /// Hz
    pub fn freq(&self) -> f64 {
        self.freq
    }

    pub fn series_resistance(&self) -> Resistance {
        self.series_resistance
    }

    pub fn series_reactance(&self) -> Resistance {
        self.series_reactance
    }

    pub fn shunt_susceptance(&self) -> Conductance {
        self.shunt_susceptance
    }

    /// Express the segment on a `base_voltage` (line-to-line) / `base_power` system base.
    ///
    /// `Zbase = kV² / MVA`; impedances are divided by it, susceptance multiplied.
    pub fn per_unit(&self, base_voltage: Voltage, base_power: Power) -> GeometryResult<PerUnitImpedance> {
        let base_kv = ensure_positive(base_voltage.get::<kilovolt>(), "base voltage")?;
        let base_mva = ensure_positive(base_power.get::<megawatt>(), "base power")?;
        let z_base = base_kv.powi(2) / base_mva;
        Ok(PerUnitImpedance {
            r: self.series_resistance.value / z_base,
            x: self.series_reactance.value / z_base,
            b: self.shunt_susceptance.value * z_base,
        })
    }
}

/// Per-unit branch values (`r`, `x`, `b`) as used by network models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerUnitImpedance {
    pub r: f64,
    pub x: f64,
    pub b: f64,
}
