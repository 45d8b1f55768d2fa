use px_project::schema::*;
use px_project::{load_json, load_yaml, save_json, save_yaml, validate_scenario};

fn throw_scenario() -> ScenarioDef {
    let mut stone = ObjectDef::at("stone", 0.5, 0.0, 45.0);
    stone.vix = 12.0;

    ScenarioDef {
        version: LATEST_VERSION,
        name: "cliff_throw".to_string(),
        objects: vec![ObjectDef::at("floor", 0.0, 0.0, 0.0), stone],
        forces: vec![ForceDef {
            name: "gravity".to_string(),
            magnitude: 9.81,
            direction: "down".to_string(),
        }],
        events: vec!["throwing".to_string(), "hover".to_string()],
        runs: vec![RunDef {
            simulation_name: "cliff_throw".to_string(),
        }],
    }
}

#[test]
fn roundtrip_yaml_empty_scenario() {
    let scenario = ScenarioDef::new("Empty Scenario");

    validate_scenario(&scenario).unwrap();

    let path = std::env::temp_dir().join("px_project_roundtrip_empty.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_yaml_throw_scenario() {
    let scenario = throw_scenario();

    let path = std::env::temp_dir().join("px_project_roundtrip_throw.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_throw_scenario() {
    let scenario = throw_scenario();

    let path = std::env::temp_dir().join("px_project_roundtrip_throw.json");
    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn save_refuses_invalid_scenario() {
    let mut scenario = throw_scenario();
    scenario.forces[0].magnitude = f64::INFINITY;

    let path = std::env::temp_dir().join("px_project_roundtrip_invalid.yaml");
    assert!(save_yaml(&path, &scenario).is_err());
}
