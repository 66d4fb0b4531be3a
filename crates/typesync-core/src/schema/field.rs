use serde::{Deserialize, Serialize};

/// Definition of a model field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name as written in the model (snake_case).
    pub name: String,

    /// Raw Django field constructor token (e.g. `CharField`, `ForeignKey`).
    pub constructor: String,
}

impl FieldDef {
    /// Create a new field definition.
    pub fn new(name: impl Into<String>, constructor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructor: constructor.into(),
        }
    }
}
