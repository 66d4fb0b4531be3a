use serde::{Deserialize, Serialize};

use super::field::FieldDef;

/// Definition of a Django model class extracted from source text.
///
/// Fields are stored in order of appearance; an empty model (no recognized
/// field lines) is dropped by the extractor and never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDef {
    /// Class name as written in the model file.
    pub name: String,

    /// Recognized fields, in source order.
    pub fields: Vec<FieldDef>,
}

impl ModelDef {
    /// Create a new model definition with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving source order.
    pub fn push_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// True when no field lines were recognized for this model.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
