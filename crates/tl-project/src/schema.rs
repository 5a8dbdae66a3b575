//! Design file schema definitions.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Design {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub conductors: Vec<ConductorDef>,
    #[serde(default)]
    pub lines: Vec<LineDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConductorDef {
    pub id: String,
    pub radius_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistance_ohm_per_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmr_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_m2: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleDef {
    pub count: usize,
    pub spacing_m: f64,
    #[serde(default = "default_layout")]
    pub layout: String,
}

/// Phase positions as `[x_m, height_m]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhasesDef {
    pub a: [f64; 2],
    pub b: [f64; 2],
    pub c: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineDef {
    pub id: String,
    /// References `ConductorDef::id`
    pub conductor: String,
    pub bundle: BundleDef,
    pub phases: PhasesDef,
    #[serde(default = "default_circuits")]
    pub circuits: u32,
    #[serde(default = "default_freq_hz")]
    pub freq_hz: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_kv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_mva: Option<f64>,
}

fn default_layout() -> String {
    "circular".to_string()
}

fn default_circuits() -> u32 {
    1
}

fn default_freq_hz() -> f64 {
    tl_core::constants::DEFAULT_FREQ_HZ
}
