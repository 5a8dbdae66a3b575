use tl_project::schema::*;
use tl_project::{load_json, load_yaml, save_json, save_yaml, validate_design};

fn simple_design() -> Design {
    Design {
        version: LATEST_VERSION,
        name: "Round Trip".to_string(),
        conductors: vec![ConductorDef {
            id: "drake".to_string(),
            radius_m: 0.01407,
            material: Some("ACSR".to_string()),
            resistance_ohm_per_km: Some(0.0718),
            gmr_m: Some(0.01143),
            area_m2: None,
        }],
        lines: vec![LineDef {
            id: "l1".to_string(),
            conductor: "drake".to_string(),
            bundle: BundleDef {
                count: 3,
                spacing_m: 0.457,
                layout: "flat".to_string(),
            },
            phases: PhasesDef {
                a: [-8.0, 25.0],
                b: [0.0, 25.0],
                c: [8.0, 25.0],
            },
            circuits: 1,
            freq_hz: 60.0,
            length_km: Some(42.0),
            base_kv: Some(230.0),
            base_mva: Some(100.0),
        }],
    }
}

#[test]
fn roundtrip_yaml_empty_design() {
    let design = Design {
        version: LATEST_VERSION,
        name: "Empty Design".to_string(),
        conductors: vec![],
        lines: vec![],
    };

    validate_design(&design).unwrap();

    let path = std::env::temp_dir().join("tl_project_roundtrip_empty.yaml");
    save_yaml(&path, &design).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(design, loaded);
}

#[test]
fn roundtrip_yaml_simple_design() {
    let design = simple_design();
    let path = std::env::temp_dir().join("tl_project_roundtrip_simple.yaml");

    save_yaml(&path, &design).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(design, loaded);
}

#[test]
fn roundtrip_json_simple_design() {
    let design = simple_design();
    let path = std::env::temp_dir().join("tl_project_roundtrip_simple.json");

    save_json(&path, &design).unwrap();
    let loaded = tl_project::load_design(&path).unwrap();
    assert_eq!(design, loaded);
    assert_eq!(load_json(&path).unwrap(), loaded);
}

#[test]
fn save_refuses_invalid_design() {
    let mut design = simple_design();
    design.lines[0].conductor = "missing".to_string();
    let path = std::env::temp_dir().join("tl_project_roundtrip_invalid.yaml");
    assert!(save_yaml(&path, &design).is_err());
}
