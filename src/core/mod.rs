pub mod compat;
pub mod gateway;

pub use crate::domain::ports::ObjectStore;
pub use crate::utils::error::Result;
