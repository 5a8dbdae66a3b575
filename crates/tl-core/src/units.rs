// tl-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Capacitance as UomCapacitance,
    ElectricPotential as UomElectricPotential,
    ElectricalConductance as UomElectricalConductance,
    ElectricalResistance as UomElectricalResistance, Frequency as UomFrequency,
    Inductance as UomInductance, Length as UomLength, Power as UomPower,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Capacitance = UomCapacitance;
pub type Conductance = UomElectricalConductance;
pub type Frequency = UomFrequency;
pub type Inductance = UomInductance;
pub type Length = UomLength;
pub type Power = UomPower;
pub type Resistance = UomElectricalResistance;
pub type Voltage = UomElectricPotential;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn km(v: f64) -> Length {
    use uom::si::length::kilometer;
    Length::new::<kilometer>(v)
}

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn mi(v: f64) -> Length {
    use uom::si::length::mile;
    Length::new::<mile>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn ohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn siemens(v: f64) -> Conductance {
    use uom::si::electrical_conductance::siemens;
    Conductance::new::<siemens>(v)
}

#[inline]
pub fn henry(v: f64) -> Inductance {
    use uom::si::inductance::henry;
    Inductance::new::<henry>(v)
}

#[inline]
pub fn farad(v: f64) -> Capacitance {
    use uom::si::capacitance::farad;
    Capacitance::new::<farad>(v)
}

#[inline]
pub fn kv(v: f64) -> Voltage {
    use uom::si::electric_potential::kilovolt;
    Voltage::new::<kilovolt>(v)
}

/// Apparent power base; uom has no volt-ampere unit so megawatt stands in for MVA.
#[inline]
pub fn mva(v: f64) -> Power {
    use uom::si::power::megawatt;
    Power::new::<megawatt>(v)
}

/// Length in kilometers as a bare number.
#[inline]
pub fn to_km(length: Length) -> f64 {
    use uom::si::length::kilometer;
    length.get::<kilometer>()
}

pub mod constants {
    use std::f64::consts::PI;

    /// Vacuum permeability, H/m.
    pub const MU_0: f64 = 4.0e-7 * PI;

    /// Vacuum permittivity, F/m.
    pub const EPSILON_0: f64 = 8.854_187_817e-12;

    /// Vacuum permeability on a per-kilometer basis, H/km.
    pub const MU_0_PER_KM: f64 = MU_0 * 1_000.0;

    /// Vacuum permittivity on a per-kilometer basis, F/km.
    pub const EPSILON_0_PER_KM: f64 = EPSILON_0 * 1_000.0;

    /// Default system frequency (North American grid), Hz.
    pub const DEFAULT_FREQ_HZ: f64 = 60.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _l = m(2.0);
        let _a = m2(1e-4);
        let _f = hz(60.0);
        let _r = ohm(0.5);
        let _g = siemens(1e-4);
        let _h = henry(1e-3);
        let _c = farad(1e-9);
        let _v = kv(345.0);
        let _s = mva(100.0);
    }

    #[test]
    fn imperial_lengths_convert() {
        let tol = Tolerances::default();
        assert!(nearly_equal(ft(1.0).value, 0.3048, tol));
        assert!(nearly_equal(to_km(mi(1.0)), 1.609_344, tol));
        assert!(nearly_equal(to_km(km(3.5)), 3.5, tol));
    }

    #[test]
    fn per_km_constants() {
        let tol = Tolerances::default();
        assert!(nearly_equal(
            constants::MU_0_PER_KM,
            4.0e-4 * std::f64::consts::PI,
            tol
        ));
        assert!(nearly_equal(constants::EPSILON_0_PER_KM, 8.854_187_817e-9, tol));
    }
}
