use crate::domain::entity::{Entity, EntityId, EntityUpdate, FieldKind, FieldSpec, FieldValue, Record};
use crate::utils::error::{Result, UniversityError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Student {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub year: i64,
    pub faculty: String,
}

impl Student {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        email: impl Into<String>,
        year: i64,
        faculty: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            year,
            faculty: faculty.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentUpdate {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub year: Option<i64>,
    pub faculty: Option<String>,
}

impl EntityUpdate for StudentUpdate {
    fn new_id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Entity for Student {
    type Update = StudentUpdate;

    const KIND: &'static str = "Student";
    const TAG: &'static str = "student";
    const COLLECTION: &'static str = "students";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Integer),
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("email", FieldKind::Text),
        FieldSpec::new("year", FieldKind::Integer),
        FieldSpec::new("faculty", FieldKind::Text),
    ];

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("id", FieldValue::Integer(self.id))
            .with("name", FieldValue::Text(self.name.clone()))
            .with("email", FieldValue::Text(self.email.clone()))
            .with("year", FieldValue::Integer(self.year))
            .with("faculty", FieldValue::Text(self.faculty.clone()))
    }

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.integer(Self::KIND, "id")?,
            name: record.text(Self::KIND, "name")?,
            email: record.text(Self::KIND, "email")?,
            year: record.integer(Self::KIND, "year")?,
            faculty: record.text(Self::KIND, "faculty")?,
        })
    }

    fn apply(&mut self, update: StudentUpdate) {
        if let Some(id) = update.id {
            self.id = id;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(faculty) = update.faculty {
            self.faculty = faculty;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Professor {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub department: String,
}

impl Professor {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfessorUpdate {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl EntityUpdate for ProfessorUpdate {
    fn new_id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Entity for Professor {
    type Update = ProfessorUpdate;

    const KIND: &'static str = "Professor";
    const TAG: &'static str = "professor";
    const COLLECTION: &'static str = "professors";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Integer),
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("email", FieldKind::Text),
        FieldSpec::new("department", FieldKind::Text),
    ];

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("id", FieldValue::Integer(self.id))
            .with("name", FieldValue::Text(self.name.clone()))
            .with("email", FieldValue::Text(self.email.clone()))
            .with("department", FieldValue::Text(self.department.clone()))
    }

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.integer(Self::KIND, "id")?,
            name: record.text(Self::KIND, "name")?,
            email: record.text(Self::KIND, "email")?,
            department: record.text(Self::KIND, "department")?,
        })
    }

    fn apply(&mut self, update: ProfessorUpdate) {
        if let Some(id) = update.id {
            self.id = id;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Course {
    pub id: EntityId,
    pub name: String,
    pub code: String,
    pub credits: i64,
}

impl Course {
    pub fn new(id: EntityId, name: impl Into<String>, code: impl Into<String>, credits: i64) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            credits,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseUpdate {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i64>,
}

impl EntityUpdate for CourseUpdate {
    fn new_id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Entity for Course {
    type Update = CourseUpdate;

    const KIND: &'static str = "Course";
    const TAG: &'static str = "course";
    const COLLECTION: &'static str = "courses";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Integer),
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("code", FieldKind::Text),
        FieldSpec::new("credits", FieldKind::Integer),
    ];

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("id", FieldValue::Integer(self.id))
            .with("name", FieldValue::Text(self.name.clone()))
            .with("code", FieldValue::Text(self.code.clone()))
            .with("credits", FieldValue::Integer(self.credits))
    }

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.integer(Self::KIND, "id")?,
            name: record.text(Self::KIND, "name")?,
            code: record.text(Self::KIND, "code")?,
            credits: record.integer(Self::KIND, "credits")?,
        })
    }

    fn apply(&mut self, update: CourseUpdate) {
        if let Some(id) = update.id {
            self.id = id;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(credits) = update.credits {
            self.credits = credits;
        }
    }
}

/// `head` holds a professor's name; it is not checked against the professors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    pub head: String,
}

impl Department {
    pub fn new(id: EntityId, name: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            head: head.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentUpdate {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub head: Option<String>,
}

impl EntityUpdate for DepartmentUpdate {
    fn new_id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Entity for Department {
    type Update = DepartmentUpdate;

    const KIND: &'static str = "Department";
    const TAG: &'static str = "department";
    const COLLECTION: &'static str = "departments";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Integer),
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("head", FieldKind::Text),
    ];

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("id", FieldValue::Integer(self.id))
            .with("name", FieldValue::Text(self.name.clone()))
            .with("head", FieldValue::Text(self.head.clone()))
    }

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.integer(Self::KIND, "id")?,
            name: record.text(Self::KIND, "name")?,
            head: record.text(Self::KIND, "head")?,
        })
    }

    fn apply(&mut self, update: DepartmentUpdate) {
        if let Some(id) = update.id {
            self.id = id;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(head) = update.head {
            self.head = head;
        }
    }
}

/// A grade links a student and a course by id. Neither reference is enforced
/// and the value has no fixed scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Grade {
    pub id: EntityId,
    pub student_id: EntityId,
    pub course_id: EntityId,
    pub grade: f64,
}

impl Grade {
    pub fn new(id: EntityId, student_id: EntityId, course_id: EntityId, grade: f64) -> Self {
        Self {
            id,
            student_id,
            course_id,
            grade,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeUpdate {
    pub id: Option<EntityId>,
    pub student_id: Option<EntityId>,
    pub course_id: Option<EntityId>,
    pub grade: Option<f64>,
}

impl EntityUpdate for GradeUpdate {
    fn new_id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Entity for Grade {
    type Update = GradeUpdate;

    const KIND: &'static str = "Grade";
    const TAG: &'static str = "grade";
    const COLLECTION: &'static str = "grades";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Integer),
        FieldSpec::new("student_id", FieldKind::Integer),
        FieldSpec::new("course_id", FieldKind::Integer),
        FieldSpec::new("grade", FieldKind::Float),
    ];

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("id", FieldValue::Integer(self.id))
            .with("student_id", FieldValue::Integer(self.student_id))
            .with("course_id", FieldValue::Integer(self.course_id))
            .with("grade", FieldValue::Float(self.grade))
    }

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.integer(Self::KIND, "id")?,
            student_id: record.integer(Self::KIND, "student_id")?,
            course_id: record.integer(Self::KIND, "course_id")?,
            grade: record.float(Self::KIND, "grade")?,
        })
    }

    /// JSON has no representation for NaN or infinity.
    fn validate(&self) -> Result<()> {
        if !self.grade.is_finite() {
            return Err(UniversityError::invalid_data(format!(
                "Grade {} value must be a finite number, got {}",
                self.id, self.grade
            )));
        }
        Ok(())
    }

    fn apply(&mut self, update: GradeUpdate) {
        if let Some(id) = update.id {
            self.id = id;
        }
        if let Some(student_id) = update.student_id {
            self.student_id = student_id;
        }
        if let Some(course_id) = update.course_id {
            self.course_id = course_id;
        }
        if let Some(grade) = update.grade {
            self.grade = grade;
        }
    }
}
