//! TypeScript interface emitter.

use std::fs;
use std::path::{Path, PathBuf};

use typesync_core::schema::ModelDef;
use typesync_core::Result;

use crate::typemap::ts_type;

/// Writes one `.ts` interface file per extracted model.
pub struct TypeScriptGenerator {
    /// Output directory for generated files.
    output_dir: PathBuf,
}

impl TypeScriptGenerator {
    /// Create a new TypeScript generator rooted at `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Render the interface source for a model.
    ///
    /// Every member is optional. The source scan does not recover
    /// `null=True` / `blank=True` reliably, so nullability is not inferred.
    pub fn render_interface(model: &ModelDef) -> String {
        let mut out = format!("export interface {} {{\n", model.name);
        for field in &model.fields {
            out.push_str(&format!("  {}?: {};\n", field.name, ts_type(&field.constructor)));
        }
        out.push_str("}\n");
        out
    }

    /// Write `<relative_dir>/<Name>.ts` under the output directory,
    /// creating ancestor directories as needed. An existing file is
    /// replaced wholesale.
    pub fn write_model(&self, model: &ModelDef, relative_dir: &Path) -> Result<PathBuf> {
        let out_path = self
            .output_dir
            .join(relative_dir)
            .join(format!("{}.ts", model.name));

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, Self::render_interface(model))?;

        Ok(out_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use typesync_core::schema::FieldDef;

    fn post_model() -> ModelDef {
        let mut model = ModelDef::new("Post");
        model.push_field(FieldDef::new("title", "CharField"));
        model.push_field(FieldDef::new("views", "IntegerField"));
        model.push_field(FieldDef::new("author", "ForeignKey"));
        model
    }

    #[test]
    fn test_render_interface() {
        let expected = "export interface Post {\n  title?: string;\n  views?: number;\n  author?: number;\n}\n";
        assert_eq!(TypeScriptGenerator::render_interface(&post_model()), expected);
    }

    #[test]
    fn test_every_member_is_optional() {
        let rendered = TypeScriptGenerator::render_interface(&post_model());
        for line in rendered.lines().filter(|l| l.contains(':')) {
            assert!(line.contains("?:"), "member not optional: {}", line);
        }
    }

    #[test]
    fn test_unmapped_constructor_renders_fallback() {
        let mut model = ModelDef::new("Region");
        model.push_field(FieldDef::new("boundary", "GeometryField"));

        let rendered = TypeScriptGenerator::render_interface(&model);
        assert!(rendered.contains("boundary?: any;"));
    }

    #[test]
    fn test_write_model_creates_directories() {
        let dir = tempdir().unwrap();
        let generator = TypeScriptGenerator::new(dir.path());

        let path = generator
            .write_model(&post_model(), Path::new("blog/posts"))
            .unwrap();

        assert_eq!(path, dir.path().join("blog/posts/Post.ts"));
        assert!(path.exists());
    }

    #[test]
    fn test_write_model_overwrites() {
        let dir = tempdir().unwrap();
        let generator = TypeScriptGenerator::new(dir.path());

        let path = generator.write_model(&post_model(), Path::new("")).unwrap();
        fs::write(&path, "stale contents").unwrap();
        generator.write_model(&post_model(), Path::new("")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, TypeScriptGenerator::render_interface(&post_model()));
    }
}
