use anyhow::Result;
use roster::utils::validation::Validate;
use roster::{RosterConfig, RosterError, RosterLoader};
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_ROSTER: &str = r#"
[roster]
name = "acme-engineering"
description = "Engineering department roster"

[[positions]]
id = "1"
name = "Junior Developer"
min_salary = 30000.0
max_salary = 50000.0

[[positions]]
id = "2"
name = "Senior Developer"
min_salary = 60000.0
max_salary = 90000.0

[[employees]]
id = "1"
name = "John Doe"
position = "1"
salary = 40000.0

[[employees]]
id = "2"
name = "Jane Smith"
position = "2"
salary = 70000.0
"#;

#[test]
fn test_load_roster_from_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(SAMPLE_ROSTER.as_bytes())?;

    let config = RosterConfig::from_file(temp_file.path())?;
    config.validate()?;

    let manager = RosterLoader::new(config).load()?;

    assert_eq!(manager.employees().len(), 2);
    assert_eq!(manager.total_salary(), 110000.0);
    assert_eq!(
        manager.employee("1").unwrap().position.name,
        "Junior Developer"
    );
    Ok(())
}

#[test]
fn test_registration_order_follows_declaration_order() -> Result<()> {
    let config = RosterConfig::from_toml_str(SAMPLE_ROSTER)?;
    let manager = RosterLoader::new(config).load()?;

    let ids: Vec<&str> = manager.employees().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
    Ok(())
}

#[test]
fn test_missing_roster_file() {
    let result = RosterConfig::from_file("no-such-roster.toml");
    assert!(matches!(result, Err(RosterError::IoError(_))));
}

#[test]
fn test_unknown_position_reference_fails_load() {
    let toml_content = r#"
[roster]
name = "broken"

[[positions]]
id = "1"
name = "Junior Developer"
min_salary = 30000.0
max_salary = 50000.0

[[employees]]
id = "1"
name = "John Doe"
position = "99"
salary = 40000.0
"#;

    let config = RosterConfig::from_toml_str(toml_content).unwrap();
    assert!(config.validate().is_err());

    let err = RosterLoader::new(config).load().unwrap_err();
    assert!(matches!(err, RosterError::InvalidConfigValueError { .. }));
}

#[test]
fn test_out_of_band_salary_surfaces_as_domain_error() {
    // structurally a fine file; the band rule fires during registration
    let toml_content = r#"
[roster]
name = "overpaid"

[[positions]]
id = "1"
name = "Junior Developer"
min_salary = 30000.0
max_salary = 50000.0

[[employees]]
id = "1"
name = "John Doe"
position = "1"
salary = 60000.0
"#;

    let config = RosterConfig::from_toml_str(toml_content).unwrap();
    assert!(config.validate().is_ok());

    let err = RosterLoader::new(config).load().unwrap_err();
    match err {
        RosterError::InvalidSalaryError { salary, max, .. } => {
            assert_eq!(salary, 60000.0);
            assert_eq!(max, 50000.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_employee_id_surfaces_as_domain_error() {
    let toml_content = r#"
[roster]
name = "doubled"

[[positions]]
id = "1"
name = "Junior Developer"
min_salary = 30000.0
max_salary = 50000.0

[[employees]]
id = "1"
name = "John Doe"
position = "1"
salary = 40000.0

[[employees]]
id = "1"
name = "Alan Mena"
position = "1"
salary = 35000.0
"#;

    let config = RosterConfig::from_toml_str(toml_content).unwrap();
    assert!(config.validate().is_ok());

    let err = RosterLoader::new(config).load().unwrap_err();
    assert!(matches!(err, RosterError::DuplicateEmployeeError { .. }));
}
