//! Printable summaries of built lines.

use serde::Serialize;
use tl_project::LineModel;

#[derive(Debug, Clone, Serialize)]
pub struct LineReport {
    pub id: String,
    pub bundle: String,
    pub freq_hz: f64,
    pub resistance_ohm_per_km: f64,
    pub inductance_h_per_km: f64,
    pub capacitance_f_per_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<SegmentReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentReport {
    pub length_km: f64,
    pub resistance_ohm: f64,
    pub reactance_ohm: f64,
    pub susceptance_s: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit: Option<PerUnitReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerUnitReport {
    pub r: f64,
    pub x: f64,
    pub b: f64,
}

impl From<&LineModel> for LineReport {
    fn from(model: &LineModel) -> Self {
        let tower = &model.tower;
        let bundle = tower.bundle();
        let segment = model.segment.map(|seg| SegmentReport {
            length_km: seg.length_km(),
            resistance_ohm: seg.series_resistance().value,
            reactance_ohm: seg.series_reactance().value,
            susceptance_s: seg.shunt_susceptance().value,
            per_unit: model.per_unit.map(|pu| PerUnitReport {
                r: pu.r,
                x: pu.x,
                b: pu.b,
            }),
        });
        Self {
            id: model.id.clone(),
            bundle: format!("{:?} x{} @ {} m", bundle.arrangement(), bundle.n(), bundle.spacing()),
            freq_hz: tower.freq(),
            resistance_ohm_per_km: tower.resistance(),
            inductance_h_per_km: tower.inductance(),
            capacitance_f_per_km: tower.capacitance(),
            segment,
        }
    }
}

impl LineReport {
    pub fn print_text(&self) {
        println!("{}", self.id);
        println!("  Bundle: {}", self.bundle);
        println!("  R = {:.6} ohm/km", self.resistance_ohm_per_km);
        println!("  L = {:.6e} H/km", self.inductance_h_per_km);
        println!("  C = {:.6e} F/km", self.capacitance_f_per_km);
        if let Some(seg) = &self.segment {
            println!("  Segment ({:.3} km at {} Hz):", seg.length_km, self.freq_hz);
            println!("    R = {:.4} ohm", seg.resistance_ohm);
            println!("    X = {:.4} ohm", seg.reactance_ohm);
            println!("    B = {:.4e} S", seg.susceptance_s);
            if let Some(pu) = &seg.per_unit {
                println!("    p.u.: r = {:.6}, x = {:.6}, b = {:.6}", pu.r, pu.x, pu.b);
            }
        }
    }
}
