//! Integration test: scenario files on disk drive complete runs.

use std::path::PathBuf;

use tether_engine::CoverageSession;
use tether_scenario::Scenario;
use tether_test_utils::assert_full_coverage;

fn scenario_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../scenarios")
}

#[test]
fn toml_and_text_reference_files_match() {
    let toml = Scenario::load(scenario_dir().join("reference.toml")).unwrap();
    let text = Scenario::load(scenario_dir().join("reference.txt")).unwrap();
    assert_eq!(toml, text);
}

#[test]
fn reference_file_runs_to_full_coverage() {
    let config = Scenario::load(scenario_dir().join("reference.toml"))
        .unwrap()
        .into_config(false)
        .unwrap();
    let mut session = CoverageSession::new(config).unwrap();
    let report = session.run().unwrap();
    assert_eq!(report.metrics.excursions, 8);
    assert_full_coverage(session.environment(), session.graph());
}

#[test]
fn warehouse_file_runs_to_full_coverage() {
    let config = Scenario::load(scenario_dir().join("warehouse.toml"))
        .unwrap()
        .into_config(false)
        .unwrap();
    let mut session = CoverageSession::new(config).unwrap();
    session.run().unwrap();
    assert_full_coverage(session.environment(), session.graph());
}

#[test]
fn written_legacy_file_loads_back() {
    let scenario = Scenario::load(scenario_dir().join("walled.toml")).unwrap();
    let path = std::env::temp_dir().join(format!("tether-walled-{}.txt", std::process::id()));
    std::fs::write(&path, scenario.to_legacy_string()).unwrap();
    let back = Scenario::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(back, scenario);
}
