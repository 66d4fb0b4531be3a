//! Line-oriented extraction of Django model declarations.
//!
//! This is a best-effort textual scan, not a Python parser. Lines that match
//! neither the class-header nor the field pattern are ignored, and malformed
//! input under-extracts rather than failing.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use typesync_core::schema::{FieldDef, ModelDef};

/// Matches a model class header: `class Post(models.Model):`.
static CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^class\s+(\w+)\((.*?)\):").unwrap());

/// Matches a field assignment: `title = models.CharField(...`.
/// The open paren is required; `on_delete=models.CASCADE` style keyword
/// arguments on their own line do not qualify.
static FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+)\s*=\s*models\.(\w+)\(").unwrap());

/// Scan cursor: either between declarations or accumulating fields for the
/// most recently seen class header.
enum Cursor {
    Idle,
    InModel(ModelDef),
}

impl Cursor {
    /// Finalize the current model, keeping it only if it has fields.
    fn flush(&mut self, models: &mut Vec<ModelDef>) {
        if let Cursor::InModel(model) = std::mem::replace(self, Cursor::Idle) {
            if model.is_empty() {
                tracing::debug!(model = %model.name, "Dropping model with no recognized fields");
            } else {
                models.push(model);
            }
        }
    }
}

/// Extract all model declarations from a file's contents, in source order.
pub fn extract_models(text: &str) -> Vec<ModelDef> {
    let mut models = Vec::new();
    let mut cursor = Cursor::Idle;

    for (lineno, line) in text.lines().enumerate() {
        if let Some(caps) = CLASS_RE.captures(line) {
            cursor.flush(&mut models);
            cursor = Cursor::InModel(ModelDef::new(&caps[1]));
        } else if line.contains("= models.") {
            match (FIELD_RE.captures(line), &mut cursor) {
                (Some(caps), Cursor::InModel(model)) => {
                    model.push_field(FieldDef::new(&caps[1], &caps[2]));
                }
                (Some(_), Cursor::Idle) => {
                    tracing::debug!(line = lineno + 1, "Ignoring field line outside any class");
                }
                (None, _) => {
                    tracing::debug!(line = lineno + 1, "Skipping malformed field line");
                }
            }
        }
    }

    cursor.flush(&mut models);
    models
}
