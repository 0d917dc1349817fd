use crate::adapters::{JsonFormat, XmlFormat};
use crate::core::store::DataStore;
use crate::core::university::{Counts, University};
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{Course, Department, Grade, Professor, Student, StudentUpdate};
use crate::utils::error::{Result, UniversityError};

/// What the lifecycle run observed at each checkpoint.
#[derive(Debug)]
pub struct LifecycleReport {
    pub seeded: Counts,
    pub reloaded_from_json: Counts,
    pub students_after_create: usize,
    pub final_json: Counts,
    pub final_xml: Counts,
    /// Failures that the run provokes on purpose (duplicate id, unknown ids).
    pub expected_failures: Vec<UniversityError>,
}

/// Initial data set: one record of every kind plus a handful of grades.
pub fn seed() -> Result<University> {
    let mut data = University::new();

    data.students
        .create(Student::new(1, "Илья Белов", "ilya.belov@example.ru", 2, "ИИТ"))?;
    data.professors.create(Professor::new(
        1,
        "Владислав Александрович Чеканин",
        "chekanin@example.ru",
        "ИИТ",
    ))?;
    data.courses
        .create(Course::new(1, "Прикладная информатика", "09.03.03", 4))?;

    data.departments
        .push(Department::new(1, "ИИТ", "Владислав Александрович Чеканин"));
    for (id, value) in [(1, 54.0), (2, 25.0), (3, 26.0), (4, 27.0)] {
        data.grades.push(Grade::new(id, 1, 1, value));
    }

    Ok(data)
}

fn expect_failure<T>(failures: &mut Vec<UniversityError>, result: Result<T>) {
    match result {
        Ok(_) => tracing::warn!("Operation was expected to fail but succeeded"),
        Err(e) => {
            tracing::warn!("{} ({})", e, e.recovery_suggestion());
            failures.push(e);
        }
    }
}

/// Seeds data, saves it in both formats, and walks through find, update,
/// create and delete with a save and reload after each change.
pub fn run_lifecycle<S: Storage, C: ConfigProvider>(
    store: &DataStore<S>,
    config: &C,
) -> Result<LifecycleReport> {
    let json_file = config.json_file();
    let xml_file = config.xml_file();

    let data = seed()?;
    let seeded = data.counts();
    tracing::info!("Seeded {}", seeded);

    store.save(&JsonFormat, &data, json_file)?;
    store.save(&XmlFormat, &data, xml_file)?;

    let mut working = store.load(&JsonFormat, json_file)?;
    let reloaded_from_json = working.counts();

    let student = working.students.find(1)?;
    tracing::info!("Found student {} (year {})", student.name, student.year);
    working.students.update(
        1,
        StudentUpdate {
            name: Some("Илья Орешников".to_string()),
            year: Some(4),
            ..Default::default()
        },
    )?;
    store.save(&JsonFormat, &working, json_file)?;

    working
        .students
        .create(Student::new(2, "Павел Брусиловский", "pavel@example.ru", 1, "ИИТ"))?;
    store.save(&JsonFormat, &working, json_file)?;
    store.save(&XmlFormat, &working, xml_file)?;

    let students_after_create = store.load(&JsonFormat, json_file)?.students.len();
    tracing::info!("Students after create: {}", students_after_create);

    working.students.delete(1)?;
    store.save(&JsonFormat, &working, json_file)?;
    store.save(&XmlFormat, &working, xml_file)?;

    let final_json = store.load(&JsonFormat, json_file)?.counts();
    let final_xml = store.load(&XmlFormat, xml_file)?.counts();
    tracing::info!("Final JSON data: {}", final_json);
    tracing::info!("Final XML data: {}", final_xml);

    let mut expected_failures = Vec::new();
    expect_failure(
        &mut expected_failures,
        working
            .students
            .create(Student::new(2, "Платон Буревестников", "platon@example.ru", 1, "ИИТ")),
    );
    expect_failure(&mut expected_failures, working.students.find(999));
    expect_failure(
        &mut expected_failures,
        working.students.update(
            999,
            StudentUpdate {
                name: Some("Новое имя".to_string()),
                ..Default::default()
            },
        ),
    );

    Ok(LifecycleReport {
        seeded,
        reloaded_from_json,
        students_after_create,
        final_json,
        final_xml,
        expected_failures,
    })
}
