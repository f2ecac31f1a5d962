//! Finalize command

use clap::Args;
use tracing::info;

use gantry_versions::calculator;

use crate::cli::project::{execute_plans, plan_updates, Project};
use crate::cli::Cli;

/// Promote release candidates to their final version
#[derive(Debug, Args)]
pub struct FinalizeCommand {
    /// Flavor to finalize (repeatable; default: all configured beta flavors)
    #[arg(short, long)]
    pub flavor: Vec<String>,

    /// Build code of the final version (default: current code + 1)
    #[arg(long)]
    pub code: Option<u64>,

    /// Compute and print without touching the file
    #[arg(long)]
    pub dry_run: bool,
}

impl FinalizeCommand {
    /// Execute the finalize command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(flavors = ?self.flavor, "executing finalize command");
        let project = Project::load()?;
        let current = project.current_versions()?;

        let plans = plan_updates(
            &current,
            &self.flavor,
            &project.config.project.flavors,
            self.code,
            |name| name.is_beta(),
            calculator::finalize,
        )?;

        execute_plans(&project, &plans, cli, self.dry_run)
    }
}
