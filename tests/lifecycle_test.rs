use anyhow::Result;
use tempfile::TempDir;
use university_records::app::lifecycle::{run_lifecycle, seed};
use university_records::{
    CliConfig, DataStore, ErrorCategory, JsonFormat, LocalStorage, TomlConfig, XmlFormat,
};

#[test]
fn test_seed_contents() -> Result<()> {
    let data = seed()?;
    let counts = data.counts();

    assert_eq!(counts.students, 1);
    assert_eq!(counts.professors, 1);
    assert_eq!(counts.courses, 1);
    assert_eq!(counts.departments, 1);
    assert_eq!(counts.grades, 4);
    assert_eq!(data.departments.find(1)?.head, data.professors.find(1)?.name);
    Ok(())
}

#[test]
fn test_full_lifecycle() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().to_str().unwrap().to_string();
    let config = CliConfig {
        data_dir: data_dir.clone(),
        ..Default::default()
    };
    let store = DataStore::new(LocalStorage::new(data_dir));

    let report = run_lifecycle(&store, &config)?;

    assert_eq!(report.seeded.students, 1);
    assert_eq!(report.reloaded_from_json, report.seeded);
    assert_eq!(report.students_after_create, 2);
    assert_eq!(report.final_json.students, 1);
    assert_eq!(report.final_json, report.final_xml);
    assert_eq!(report.final_json.grades, 4);

    let categories: Vec<ErrorCategory> = report
        .expected_failures
        .iter()
        .map(|e| e.category())
        .collect();
    assert_eq!(
        categories,
        vec![
            ErrorCategory::DuplicateId,
            ErrorCategory::NotFound,
            ErrorCategory::NotFound
        ]
    );

    let from_json = store.load(&JsonFormat, "university.json")?;
    let from_xml = store.load(&XmlFormat, "university.xml")?;
    assert_eq!(from_json, from_xml);

    let remaining = from_json.students.find(2)?;
    assert_eq!(remaining.name, "Павел Брусиловский");
    assert!(!from_json.students.contains(1));
    Ok(())
}

#[test]
fn test_lifecycle_with_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().to_str().unwrap().replace('\\', "/");
    let config = TomlConfig::from_toml_str(&format!(
        "[storage]\ndata_dir = \"{}\"\njson_file = \"nested/records.json\"\nxml_file = \"nested/records.xml\"\n",
        data_dir
    ))?;
    let store = DataStore::new(LocalStorage::new(data_dir));

    run_lifecycle(&store, &config)?;

    assert!(temp_dir.path().join("nested/records.json").is_file());
    assert!(temp_dir.path().join("nested/records.xml").is_file());
    Ok(())
}
