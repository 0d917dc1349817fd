use crate::core::collection::Collection;
use crate::domain::model::{Course, Department, Grade, Professor, Student};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// In-memory aggregate of every record collection.
///
/// Collections missing from a JSON document load as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct University {
    pub students: Collection<Student>,
    pub professors: Collection<Professor>,
    pub courses: Collection<Course>,
    pub departments: Collection<Department>,
    pub grades: Collection<Grade>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub students: usize,
    pub professors: usize,
    pub courses: usize,
    pub departments: usize,
    pub grades: usize,
}

impl University {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> Counts {
        Counts {
            students: self.students.len(),
            professors: self.professors.len(),
            courses: self.courses.len(),
            departments: self.departments.len(),
            grades: self.grades.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts() == Counts::default()
    }

    pub fn validate(&self) -> Result<()> {
        self.students.validate_all()?;
        self.professors.validate_all()?;
        self.courses.validate_all()?;
        self.departments.validate_all()?;
        self.grades.validate_all()
    }
}

impl std::fmt::Display for Counts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "students: {}, professors: {}, courses: {}, departments: {}, grades: {}",
            self.students, self.professors, self.courses, self.departments, self.grades
        )
    }
}
