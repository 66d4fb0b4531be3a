pub mod extract;
pub mod typemap;
pub mod typescript;
pub mod walker;

pub use extract::extract_models;
pub use typemap::ts_type;
pub use typescript::TypeScriptGenerator;
pub use walker::{generate, EmittedInterface, GenerateReport};
