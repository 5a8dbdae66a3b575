//! Translate design definitions into resolved geometry.

use crate::schema::{ConductorDef, Design, LineDef};
use crate::{ProjectError, ProjectResult};
use tl_core::units::{km, kv, mva};
use tl_geometry::{
    BundleSpec, Conductor, ConductorSpec, GeometryResult, LineSegment, PerUnitImpedance,
    PhaseLocations, Tower, TowerSpec,
};
use tracing::debug;

/// A design line with everything the file lets us compute.
#[derive(Debug, Clone, PartialEq)]
pub struct LineModel {
    pub id: String,
    pub tower: Tower,
    /// Present when the line has `length_km`.
    pub segment: Option<LineSegment>,
    /// Present when the line has a length and both bases.
    pub per_unit: Option<PerUnitImpedance>,
}

pub fn build_conductor(def: &ConductorDef) -> GeometryResult<Conductor> {
    let mut spec = ConductorSpec::new(def.radius_m);
    spec.material = def.material.clone();
    spec.resistance_per_km = def.resistance_ohm_per_km;
    spec.gmr = def.gmr_m;
    spec.area = def.area_m2;
    spec.resolve()
}

fn resolve_line(design: &Design, line: &LineDef) -> GeometryResult<LineModel> {
    // References were checked by validation
    let conductor_def = design
        .conductors
        .iter()
        .find(|c| c.id == line.conductor);
    let conductor = match conductor_def {
        Some(def) => build_conductor(def)?,
        None => {
            return Err(tl_geometry::GeometryError::Config {
                what: format!("unknown conductor '{}'", line.conductor),
            });
        }
    };

    let bundle = BundleSpec::new(line.bundle.count, line.bundle.spacing_m, conductor)
        .layout(line.bundle.layout.as_str())
        .build()?;
    let [a, b, c] = [line.phases.a, line.phases.b, line.phases.c].map(|[x, h]| (x, h));
    let tower = TowerSpec::new(PhaseLocations::new(a, b, c), bundle)
        .circuits(line.circuits)
        .freq(line.freq_hz)
        .build()?;

    let segment = line
        .length_km
        .map(|length| LineSegment::new(&tower, km(length)))
        .transpose()?;
    let per_unit = match (segment, line.base_kv, line.base_mva) {
        (Some(seg), Some(base_kv), Some(base_mva)) => Some(seg.per_unit(kv(base_kv), mva(base_mva))?),
        _ => None,
    };
    debug!(line = %line.id, has_segment = segment.is_some(), "built line model");

    Ok(LineModel {
        id: line.id.clone(),
        tower,
        segment,
        per_unit,
    })
}

pub fn build_line(design: &Design, line_id: &str) -> ProjectResult<LineModel> {
    let line = design
        .lines
        .iter()
        .find(|l| l.id == line_id)
        .ok_or_else(|| ProjectError::LineNotFound(line_id.to_string()))?;
    resolve_line(design, line).map_err(|source| ProjectError::Geometry {
        line_id: line.id.clone(),
        source,
    })
}

pub fn build_tower(design: &Design, line_id: &str) -> ProjectResult<Tower> {
    build_line(design, line_id).map(|model| model.tower)
}

/// Build every line in file order, stopping at the first failure.
pub fn build_all(design: &Design) -> ProjectResult<Vec<LineModel>> {
    design
        .lines
        .iter()
        .map(|line| build_line(design, &line.id))
        .collect()
}
