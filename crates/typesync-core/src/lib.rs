pub mod config;
pub mod error;
pub mod schema;

pub use config::TypesyncConfig;
pub use error::{Result, TypesyncError};
pub use schema::{FieldDef, ModelDef};
