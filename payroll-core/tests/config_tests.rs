//! Config file loading and config-driven registry tests.

use assert_fs::prelude::*;
use payroll_core::{
    ConfigError, Employee, EmployeeId, EmployeeRegistry, PayrollConfig, PositionChange,
    PositionId,
};
use predicates::prelude::*;

const CATALOG: &str = "\
promotion_tolerance: 0.2
positions:
  - id: \"1\"
    name: Junior Developer
    min_salary: 30000
    max_salary: 50000
  - id: \"2\"
    name: Senior Developer
    min_salary: 60000
    max_salary: 90000
";

// ---------------------------------------------------------------------------
// 1. Loading
// ---------------------------------------------------------------------------

#[test]
fn load_catalog_from_file() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("payroll.yaml");
    file.write_str(CATALOG).expect("write");
    file.assert(predicate::path::exists());

    let config = PayrollConfig::load_at(file.path()).expect("load");
    assert_eq!(config.promotion_tolerance, 0.2);
    assert_eq!(config.positions.len(), 2);
    let senior = config.position(&PositionId::from("2")).expect("senior");
    assert_eq!(senior.min_salary(), 60_000.0);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let err = PayrollConfig::load_at(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)), "got: {err}");
}

#[test]
fn load_corrupt_yaml_reports_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("payroll.yaml");
    file.write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed").expect("write");

    let err = PayrollConfig::load_at(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("payroll.yaml"), "must contain file path, got: {err}");
}

#[test]
fn inverted_catalog_position_is_rejected() {
    let yaml = "positions:\n  - id: \"x\"\n    name: Upside Down\n    min_salary: 90000\n    max_salary: 10000\n";
    let err = PayrollConfig::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)), "got: {err}");
    assert!(err.to_string().contains("invalid position `x`"), "got: {err}");
}

#[test]
fn inverted_catalog_position_in_file_reports_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("payroll.yaml");
    file.write_str("positions:\n  - id: \"x\"\n    name: Upside Down\n    min_salary: 90000\n    max_salary: 10000\n")
        .expect("write");

    let err = PayrollConfig::load_at(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
}

#[test]
fn hand_built_config_is_checked_by_registry() {
    let config = PayrollConfig {
        promotion_tolerance: 1.5,
        positions: vec![],
    };
    let err = EmployeeRegistry::with_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTolerance { .. }), "got: {err}");
}

#[test]
fn duplicate_catalog_ids_are_rejected() {
    let yaml = "\
positions:
  - id: \"1\"
    name: A
    min_salary: 1
    max_salary: 2
  - id: \"1\"
    name: B
    min_salary: 3
    max_salary: 4
";
    let err = PayrollConfig::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicatePosition { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. Registry driven by config
// ---------------------------------------------------------------------------

#[test]
fn wider_tolerance_admits_lower_promotion() {
    let config = PayrollConfig::from_yaml_str(CATALOG).expect("parse");
    let junior = config.position(&PositionId::from("1")).expect("junior").clone();
    let senior = config.position(&PositionId::from("2")).expect("senior").clone();

    // 50000 is ~83% of the Senior minimum: rejected at 10%, admitted at 20%.
    let mut strict = EmployeeRegistry::new();
    strict
        .add_employee(Employee::new("1", "Ana", junior.clone(), 50_000.0))
        .expect("add");
    assert!(strict
        .update_employee_position(&EmployeeId::from("1"), senior.clone())
        .is_err());

    let mut lenient = EmployeeRegistry::with_config(&config).expect("valid config");
    lenient
        .add_employee(Employee::new("1", "Ana", junior, 50_000.0))
        .expect("add");
    let change = lenient
        .update_employee_position(&EmployeeId::from("1"), senior)
        .expect("promote");
    assert_eq!(change, PositionChange::RaisedToMinimum { previous_salary: 50_000.0 });
    assert_eq!(lenient.calculate_total_salary(), 60_000.0);
}
