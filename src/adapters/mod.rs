// Adapters layer: concrete implementations of the domain ports (storage, file formats).

pub mod json;
pub mod storage;
pub mod xml;

use crate::core::Format;
use crate::utils::error::{Result, UniversityError};
use std::path::Path;

pub use json::JsonFormat;
pub use storage::LocalStorage;
pub use xml::XmlFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Json,
    Xml,
}

impl FormatKind {
    /// Picks the format from the file extension, ignoring case.
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(FormatKind::Json),
            Some("xml") => Ok(FormatKind::Xml),
            _ => Err(UniversityError::invalid_data(format!(
                "cannot tell the format of '{}': expected a .json or .xml file",
                path
            ))),
        }
    }

    pub fn format(self) -> Box<dyn Format> {
        match self {
            FormatKind::Json => Box::new(JsonFormat),
            FormatKind::Xml => Box::new(XmlFormat),
        }
    }
}
