use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use console::style;

const CONFIG_FILE: &str = "typesync.toml";

const DEFAULT_CONFIG: &str = r#"# typesync configuration

[paths]
# Root directory scanned recursively for models.py files.
backend_dir = "backend/models"

# Output location for generated .ts files. The source directory
# structure is mirrored here, one interface per file.
frontend_dir = "frontend/src/lib/types/models"
"#;

/// Create a starter typesync.toml in the current directory.
#[derive(Parser)]
pub struct InitCommand {
    /// Overwrite an existing typesync.toml.
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self) -> Result<()> {
        write_config(Path::new("."), self.force)?;
        println!("  {} Created {}", style("✓").green(), CONFIG_FILE);
        Ok(())
    }
}

/// Write the starter config into `dir`, refusing to overwrite unless forced.
fn write_config(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", CONFIG_FILE);
    }

    fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}
