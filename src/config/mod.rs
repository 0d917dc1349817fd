pub mod toml_config;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_JSON_FILE: &str = "university.json";
pub const DEFAULT_XML_FILE: &str = "university.xml";

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "university"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Manage university records stored as JSON and XML files")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_DATA_DIR))]
    pub data_dir: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_JSON_FILE))]
    pub json_file: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_XML_FILE))]
    pub xml_file: String,

    /// TOML configuration file; replaces the storage options above
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            json_file: DEFAULT_JSON_FILE.to_string(),
            xml_file: DEFAULT_XML_FILE.to_string(),
            config: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn json_file(&self) -> &str {
        &self.json_file
    }

    fn xml_file(&self) -> &str {
        &self.xml_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_file_extension("json_file", &self.json_file, "json")?;
        validate_file_extension("xml_file", &self.xml_file, "xml")?;
        if let Some(config) = &self.config {
            validate_file_extension("config", config, "toml")?;
        }
        Ok(())
    }
}
