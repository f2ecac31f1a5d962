//! Bump command

use clap::{Args, Subcommand};
use tracing::info;

use gantry_versions::{calculator, VersionName};

use crate::cli::project::{execute_plans, plan_updates, Project};
use crate::cli::Cli;

/// Bump to the next alpha, beta, or hotfix version
#[derive(Debug, Args)]
pub struct BumpCommand {
    #[command(subcommand)]
    pub target: BumpTarget,
}

/// Which release step to bump to
#[derive(Debug, Subcommand)]
pub enum BumpTarget {
    /// Next release candidate (or cut the first RC of the next minor)
    Beta(BumpArgs),

    /// Next alpha build
    Alpha(BumpArgs),

    /// Operator-supplied hotfix version
    Hotfix(HotfixArgs),
}

/// Arguments shared by the beta and alpha targets
#[derive(Debug, Args)]
pub struct BumpArgs {
    /// Flavor to bump (repeatable; default: all applicable configured flavors)
    #[arg(short, long)]
    pub flavor: Vec<String>,

    /// Build code of the new version (default: current code + 1)
    #[arg(long)]
    pub code: Option<u64>,

    /// Compute and print without touching the file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the hotfix target
#[derive(Debug, Args)]
#[command(disable_version_flag = true)]
pub struct HotfixArgs {
    /// The new hotfix version, as major.minor.hotfix
    #[arg(long)]
    pub version: String,

    /// The version being patched (default: the flavor's current version)
    #[arg(long)]
    pub previous: Option<String>,

    /// Flavor to bump (repeatable; default: all non-alpha configured flavors)
    #[arg(short, long)]
    pub flavor: Vec<String>,

    /// Build code of the new version (default: current code + 1)
    #[arg(long)]
    pub code: Option<u64>,

    /// Compute and print without touching the file
    #[arg(long)]
    pub dry_run: bool,
}

impl BumpCommand {
    /// Execute the bump command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let project = Project::load()?;
        let current = project.current_versions()?;
        let configured = &project.config.project.flavors;

        let (plans, dry_run) = match &self.target {
            BumpTarget::Beta(args) => {
                info!(flavors = ?args.flavor, "executing bump beta command");
                let plans = plan_updates(
                    &current,
                    &args.flavor,
                    configured,
                    args.code,
                    |name| name.is_beta() || name.is_final(),
                    calculator::next_beta,
                )?;
                (plans, args.dry_run)
            }
            BumpTarget::Alpha(args) => {
                info!(flavors = ?args.flavor, "executing bump alpha command");
                let plans = plan_updates(
                    &current,
                    &args.flavor,
                    configured,
                    args.code,
                    |name| name.is_alpha(),
                    calculator::next_alpha,
                )?;
                (plans, args.dry_run)
            }
            BumpTarget::Hotfix(args) => {
                info!(version = %args.version, flavors = ?args.flavor, "executing bump hotfix command");
                let previous: Option<VersionName> = args
                    .previous
                    .as_deref()
                    .map(|s| s.parse())
                    .transpose()?;
                let plans = plan_updates(
                    &current,
                    &args.flavor,
                    configured,
                    args.code,
                    |name| !name.is_alpha(),
                    |name| calculator::next_hotfix(&args.version, previous.as_ref().unwrap_or(name)),
                )?;
                (plans, args.dry_run)
            }
        };

        execute_plans(&project, &plans, cli, dry_run)
    }
}
