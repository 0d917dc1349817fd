use anyhow::Result;
use tempfile::TempDir;
use university_records::{
    Course, DataStore, Department, ErrorCategory, Grade, LocalStorage, Professor, Student,
    University, UniversityError, XmlFormat,
};

fn store(temp_dir: &TempDir) -> DataStore<LocalStorage> {
    DataStore::new(LocalStorage::new(temp_dir.path().to_str().unwrap()))
}

fn write(temp_dir: &TempDir, name: &str, content: &str) -> Result<()> {
    std::fs::write(temp_dir.path().join(name), content)?;
    Ok(())
}

#[test]
fn test_xml_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store(&temp_dir);

    let mut data = University::new();
    data.students
        .create(Student::new(1, "Илья Белов", "ilya@example.ru", 2, "ИИТ"))?;
    data.students
        .create(Student::new(2, "Tom & Jerry", "tj@example.com", 3, "<Arts>"))?;
    data.professors
        .create(Professor::new(1, "Чеканин", "chekanin@example.ru", "ИИТ"))?;
    data.courses
        .create(Course::new(1, "Прикладная информатика", "09.03.03", 4))?;
    data.departments.push(Department::new(1, "ИИТ", "Чеканин"));
    data.grades.push(Grade::new(1, 1, 1, 54.0));
    data.grades.push(Grade::new(2, 2, 1, 3.25));

    store.save(&XmlFormat, &data, "university.xml")?;
    let loaded = store.load(&XmlFormat, "university.xml")?;

    assert_eq!(loaded, data);
    Ok(())
}

#[test]
fn test_xml_round_trip_keeps_significant_whitespace() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store(&temp_dir);

    let mut data = University::new();
    data.students
        .create(Student::new(1, " Anna ", "anna@x.com", 2, "F\n"))?;
    data.professors
        .create(Professor::new(1, "Ivan  Petrov", "\tivan@x.com", "Line one\nLine two"))?;
    data.departments
        .push(Department::new(1, "  Math", "Euler  "));

    store.save(&XmlFormat, &data, "spaced.xml")?;
    let loaded = store.load(&XmlFormat, "spaced.xml")?;

    assert_eq!(loaded, data);
    assert_eq!(loaded.students.find(1)?.name, " Anna ");
    assert_eq!(loaded.students.find(1)?.faculty, "F\n");
    Ok(())
}

#[test]
fn test_xml_numbers_tolerate_surrounding_whitespace() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(
        &temp_dir,
        "padded.xml",
        "<university><courses><course><id> 2 </id><name> Logic </name><code>L-1</code><credits>\n3\n</credits></course></courses></university>",
    )?;

    let data = store(&temp_dir).load(&XmlFormat, "padded.xml")?;
    let course = data.courses.find(2)?;
    assert_eq!(course.name, " Logic ");
    assert_eq!(course.credits, 3);
    Ok(())
}

#[test]
fn test_xml_round_trip_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store(&temp_dir);

    store.save(&XmlFormat, &University::new(), "empty.xml")?;
    let text = std::fs::read_to_string(temp_dir.path().join("empty.xml"))?;
    assert!(text.contains("<university>"));
    assert!(text.contains("<grades/>"));

    assert!(store.load(&XmlFormat, "empty.xml")?.is_empty());
    Ok(())
}

#[test]
fn test_xml_type_coercion() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(
        &temp_dir,
        "typed.xml",
        r#"<?xml version="1.0" encoding="utf-8"?>
<university>
  <courses>
    <course>
      <id>3</id>
      <name>007</name>
      <code>42</code>
      <credits>5</credits>
    </course>
  </courses>
  <grades>
    <grade>
      <id>1</id>
      <student_id>10</student_id>
      <course_id>3</course_id>
      <grade>54</grade>
    </grade>
  </grades>
</university>
"#,
    )?;

    let data = store(&temp_dir).load(&XmlFormat, "typed.xml")?;

    let course = data.courses.find(3)?;
    assert_eq!(course.name, "007");
    assert_eq!(course.code, "42");
    assert_eq!(course.credits, 5);
    assert_eq!(data.grades.find(1)?.grade, 54.0);
    assert!(data.students.is_empty());
    Ok(())
}

#[test]
fn test_xml_field_order_does_not_matter() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(
        &temp_dir,
        "reordered.xml",
        "<university><departments><department><head>Euler</head><id>4</id><name>Math</name></department></departments></university>",
    )?;

    let data = store(&temp_dir).load(&XmlFormat, "reordered.xml")?;
    assert_eq!(data.departments.find(4)?, &Department::new(4, "Math", "Euler"));
    Ok(())
}

#[test]
fn test_xml_missing_field_fails_loudly() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(
        &temp_dir,
        "missing.xml",
        "<university><professors><professor><id>1</id><name>Ivanov</name><email>i@uni.ru</email></professor></professors></university>",
    )?;

    let store = store(&temp_dir);
    let err = store.load(&XmlFormat, "missing.xml").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidData);
    assert!(err.to_string().contains("department"));

    assert!(store.load_or_default(&XmlFormat, "missing.xml").is_empty());
    Ok(())
}

#[test]
fn test_xml_empty_field_is_dropped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store(&temp_dir);

    let mut data = University::new();
    data.students.create(Student::new(1, "   ", "a@x.com", 2, "F"))?;
    store.save(&XmlFormat, &data, "blank.xml")?;

    let err = store.load(&XmlFormat, "blank.xml").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidData);
    assert!(err.to_string().contains("name"));
    Ok(())
}

#[test]
fn test_xml_bad_number_is_invalid_data() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(
        &temp_dir,
        "bad.xml",
        "<university><students><student><id>one</id><name>A</name><email>a@x.com</email><year>2</year><faculty>F</faculty></student></students></university>",
    )?;

    let err = store(&temp_dir).load(&XmlFormat, "bad.xml").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidData);
    Ok(())
}

#[test]
fn test_xml_malformed_document() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(&temp_dir, "broken.xml", "<university><students></courses></university>")?;

    let err = store(&temp_dir).load(&XmlFormat, "broken.xml").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Serialization);
    Ok(())
}

#[test]
fn test_xml_missing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let err = store(&temp_dir).load(&XmlFormat, "nowhere.xml").unwrap_err();
    assert!(matches!(err, UniversityError::FileNotFound { .. }));
    Ok(())
}
