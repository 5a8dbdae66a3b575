//! Design validation logic.
//!
//! Structural checks only (ids, references, numeric ranges). Electrical
//! feasibility is left to `tl-geometry`, which reports it when a line is built.

use crate::schema::{ConductorDef, Design, LATEST_VERSION, LineDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_design(design: &Design) -> Result<(), ValidationError> {
    if design.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: design.version,
        });
    }

    let mut conductor_ids = HashSet::new();
    for conductor in &design.conductors {
        if !conductor_ids.insert(conductor.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: conductor.id.clone(),
                context: "conductors".to_string(),
            });
        }
        validate_conductor(conductor)?;
    }

    let mut line_ids = HashSet::new();
    for line in &design.lines {
        if !line_ids.insert(line.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: line.id.clone(),
                context: "lines".to_string(),
            });
        }
        if !conductor_ids.contains(line.conductor.as_str()) {
            return Err(ValidationError::MissingReference {
                id: line.conductor.clone(),
                context: format!("line '{}' conductor", line.id),
            });
        }
        validate_line(line)?;
    }

    Ok(())
}

fn validate_conductor(conductor: &ConductorDef) -> Result<(), ValidationError> {
    let context = format!("conductor '{}'", conductor.id);
    require_positive(&context, "radius_m", conductor.radius_m)?;
    for (field, value) in [
        ("resistance_ohm_per_km", conductor.resistance_ohm_per_km),
        ("gmr_m", conductor.gmr_m),
        ("area_m2", conductor.area_m2),
    ] {
        if let Some(v) = value {
            require_positive(&context, field, v)?;
        }
    }
    Ok(())
}

fn validate_line(line: &LineDef) -> Result<(), ValidationError> {
    let context = format!("line '{}'", line.id);
    require_positive(&context, "bundle.spacing_m", line.bundle.spacing_m)?;
    require_positive(&context, "freq_hz", line.freq_hz)?;
    if line.bundle.count == 0 {
        return Err(invalid(
            &context,
            "bundle.count",
            "0",
            "at least one conductor per phase",
        ));
    }

    for (phase, [x, height]) in [("a", line.phases.a), ("b", line.phases.b), ("c", line.phases.c)] {
        if !x.is_finite() {
            return Err(invalid(
                &context,
                &format!("phases.{phase}[0]"),
                &x.to_string(),
                "must be finite",
            ));
        }
        require_positive(&context, &format!("phases.{phase}[1]"), height)?;
    }

    if let Some(length) = line.length_km {
        require_positive(&context, "length_km", length)?;
    }
    match (line.base_kv, line.base_mva) {
        (Some(kv), Some(mva)) => {
            require_positive(&context, "base_kv", kv)?;
            require_positive(&context, "base_mva", mva)?;
        }
        (None, None) => {}
        (Some(_), None) => {
            return Err(invalid(&context, "base_mva", "missing", "required with base_kv"));
        }
        (None, Some(_)) => {
            return Err(invalid(&context, "base_kv", "missing", "required with base_mva"));
        }
    }
    Ok(())
}

fn require_positive(context: &str, field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(
            context,
            field,
            &value.to_string(),
            "must be finite and positive",
        ))
    }
}

fn invalid(context: &str, field: &str, value: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: format!("{context} {field}"),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
