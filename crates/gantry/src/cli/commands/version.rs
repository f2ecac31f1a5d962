//! Version command

use clap::Args;
use tracing::info;

use crate::cli::{output, project::Project, Cli, OutputFormat};

/// Show current per-flavor versions
#[derive(Debug, Args)]
pub struct VersionCommand {
    /// Show a single flavor
    #[arg(short, long)]
    pub flavor: Option<String>,
}

impl VersionCommand {
    /// Execute the version command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(flavor = ?self.flavor, "executing version command");
        let project = Project::load()?;
        let versions = project.current_versions()?;

        if let Some(flavor) = &self.flavor {
            let version = versions.get(flavor).ok_or_else(|| {
                anyhow::anyhow!(
                    "flavor '{}' has no version info in {}",
                    flavor,
                    project.version_file.display()
                )
            })?;
            match cli.format {
                OutputFormat::Json => {
                    let result = serde_json::json!({
                        "flavor": flavor,
                        "name": version.name.to_string(),
                        "code": version.code,
                    });
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                OutputFormat::Text => println!("{}", version),
            }
            return Ok(());
        }

        match cli.format {
            OutputFormat::Json => {
                let flavors: Vec<serde_json::Value> = versions
                    .iter()
                    .map(|(flavor, version)| {
                        serde_json::json!({
                            "flavor": flavor,
                            "name": version.name.to_string(),
                            "code": version.code,
                        })
                    })
                    .collect();
                let result = serde_json::json!({
                    "file": project.version_file.display().to_string(),
                    "flavors": flavors,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", output::header("Versions"));
                }
                for (flavor, version) in versions.iter() {
                    println!(
                        "{}",
                        output::key_value(flavor, &version.to_string())
                    );
                }
            }
        }
        Ok(())
    }
}
