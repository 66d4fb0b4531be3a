mod field;
mod model;

pub use field::FieldDef;
pub use model::ModelDef;
