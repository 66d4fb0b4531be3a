use std::path::Path;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing::info;

use typesync_core::TypesyncConfig;

/// Generate TypeScript interfaces from Django models.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Source directory to scan for models.py files (overrides config).
    #[arg(short, long)]
    pub src: Option<String>,

    /// Output directory for generated .ts files (overrides config).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Configuration file path.
    #[arg(short, long, default_value = "typesync.toml")]
    pub config: String,

    /// Abort on the first unreadable source file instead of skipping it.
    #[arg(long)]
    pub strict: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self) -> Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
            .init();

        let config = if Path::new(&self.config).exists() {
            info!("Loading configuration from {}", self.config);
            TypesyncConfig::from_file(&self.config)?
        } else {
            TypesyncConfig::default()
        };

        let src_dir = self.src.unwrap_or(config.paths.backend_dir);
        let output_dir = self.output.unwrap_or(config.paths.frontend_dir);

        println!(
            "  {} Scanning models in: {}",
            style("📁").bold(),
            style(&src_dir).cyan()
        );

        let report = typesync_codegen::generate(
            Path::new(&src_dir),
            Path::new(&output_dir),
            self.strict,
        )?;

        for emitted in &report.emitted {
            println!(
                "  {} {} → {}",
                style("✓").green(),
                style(&emitted.model).bold(),
                emitted.path.display()
            );
        }

        println!();
        println!(
            "  {} Done. {} interfaces generated.",
            style("🎯").bold(),
            style(report.count()).cyan()
        );

        Ok(())
    }
}
