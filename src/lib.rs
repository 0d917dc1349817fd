pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FormatKind, JsonFormat, LocalStorage, XmlFormat};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{collection::Collection, store::DataStore, university::University};
pub use domain::model::{
    Course, CourseUpdate, Department, DepartmentUpdate, Grade, GradeUpdate, Professor,
    ProfessorUpdate, Student, StudentUpdate,
};
pub use utils::error::{ErrorCategory, Result, UniversityError};
