pub mod collection;
pub mod store;
pub mod university;

pub use crate::domain::entity::{Entity, EntityId};
pub use crate::domain::ports::{ConfigProvider, Format, Storage};
pub use crate::utils::error::Result;
