use crate::utils::error::{Result, UniversityError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Identifier shared by every entity type. Signed so that invalid (non-positive)
/// values can reach validation instead of being unrepresentable.
pub type EntityId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
}

impl FieldKind {
    /// Coerces the text content of an XML leaf into a typed value.
    pub fn parse(self, field: &str, text: &str) -> Result<FieldValue> {
        match self {
            FieldKind::Integer => text.trim().parse::<i64>().map(FieldValue::Integer).map_err(|e| {
                UniversityError::invalid_data(format!("field '{}': '{}' is not an integer ({})", field, text, e))
            }),
            FieldKind::Float => text.trim().parse::<f64>().map(FieldValue::Float).map_err(|e| {
                UniversityError::invalid_data(format!("field '{}': '{}' is not a number ({})", field, text, e))
            }),
            FieldKind::Text => Ok(FieldValue::Text(text.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

/// Ordered list of field values, in the entity's declared field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: FieldValue) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: &'static str, value: FieldValue) {
        self.fields.push((name, value));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    fn require(&self, entity: &str, name: &str) -> Result<&FieldValue> {
        self.get(name).ok_or_else(|| {
            UniversityError::invalid_data(format!("{} is missing required field '{}'", entity, name))
        })
    }

    pub fn integer(&self, entity: &str, name: &str) -> Result<i64> {
        match self.require(entity, name)? {
            FieldValue::Integer(value) => Ok(*value),
            other => Err(UniversityError::invalid_data(format!(
                "{} field '{}' must be an integer, got '{}'",
                entity, name, other
            ))),
        }
    }

    pub fn float(&self, entity: &str, name: &str) -> Result<f64> {
        match self.require(entity, name)? {
            FieldValue::Float(value) => Ok(*value),
            FieldValue::Integer(value) => Ok(*value as f64),
            other => Err(UniversityError::invalid_data(format!(
                "{} field '{}' must be a number, got '{}'",
                entity, name, other
            ))),
        }
    }

    pub fn text(&self, entity: &str, name: &str) -> Result<String> {
        match self.require(entity, name)? {
            FieldValue::Text(value) => Ok(value.clone()),
            other => Err(UniversityError::invalid_data(format!(
                "{} field '{}' must be text, got '{}'",
                entity, name, other
            ))),
        }
    }
}

/// Partial change to an entity. Only the id matters to the collection, which
/// has to check it for uniqueness before anything is applied.
pub trait EntityUpdate {
    fn new_id(&self) -> Option<EntityId>;
}

pub trait Entity: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned {
    type Update: EntityUpdate;

    /// Human readable type name used in messages ("Student").
    const KIND: &'static str;
    /// XML element name of a single entity ("student").
    const TAG: &'static str;
    /// Key of the collection in JSON and XML ("students").
    const COLLECTION: &'static str;
    const FIELDS: &'static [FieldSpec];

    fn id(&self) -> EntityId;

    fn to_record(&self) -> Record;

    fn from_record(record: &Record) -> Result<Self>;

    fn apply(&mut self, update: Self::Update);

    /// Checks field values that every format must be able to store.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
