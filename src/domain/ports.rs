use crate::core::university::University;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn exists(&self, path: &str) -> bool;
}

/// Text encoding of a whole [`University`].
pub trait Format {
    fn name(&self) -> &'static str;
    fn extension(&self) -> &'static str;
    fn encode(&self, data: &University) -> Result<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> Result<University>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn json_file(&self) -> &str;
    fn xml_file(&self) -> &str;
}
