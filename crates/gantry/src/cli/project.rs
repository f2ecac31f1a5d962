//! Project resolution shared by the commands

use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use gantry_adapters::{adapter_for, VersionFile};
use gantry_core::config::{load_config_or_default, Config};
use gantry_versions::{Version, VersionName, VersionSet};

/// A resolved project: configuration plus the adapter for its version file
pub struct Project {
    pub config: Config,
    /// Resolved path of the version file
    pub version_file: PathBuf,
    pub adapter: Box<dyn VersionFile>,
}

impl Project {
    /// Resolve the project from the current directory
    pub fn load() -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd);

        let root = config_path
            .as_ref()
            .and_then(|p| p.parent())
            .map(PathBuf::from)
            .unwrap_or(cwd);
        let version_file = root.join(&config.project.version_file);
        let adapter = adapter_for(&config.project);

        debug!(
            version_file = %version_file.display(),
            format = adapter.format(),
            "resolved project"
        );
        Ok(Self {
            config,
            version_file,
            adapter,
        })
    }

    /// Read the current versions of all configured flavors
    pub fn current_versions(&self) -> anyhow::Result<VersionSet> {
        self.adapter.read(&self.version_file).with_context(|| {
            format!(
                "failed to read versions from {}",
                self.version_file.display()
            )
        })
    }
}

/// One flavor's planned version transition
pub struct BumpPlan {
    pub flavor: String,
    pub current: Version,
    pub next: Version,
}

/// Plan version transitions for the selected flavors.
///
/// With explicitly requested flavors every one of them must support the
/// transition; when defaulting to the configured flavor list, only those
/// the `applicable` filter accepts are planned, and at least one must
/// match. Either way the whole plan is computed before anything is
/// written, so a failing flavor aborts with nothing changed.
pub fn plan_updates(
    current: &VersionSet,
    requested: &[String],
    configured: &[String],
    code_override: Option<u64>,
    applicable: impl Fn(&VersionName) -> bool,
    transition: impl Fn(&VersionName) -> gantry_core::error::Result<VersionName>,
) -> anyhow::Result<Vec<BumpPlan>> {
    let explicit = !requested.is_empty();
    let flavors: Vec<&String> = if explicit {
        requested.iter().collect()
    } else {
        configured
            .iter()
            .filter(|f| current.get(f.as_str()).is_some_and(|v| applicable(&v.name)))
            .collect()
    };

    if flavors.is_empty() {
        anyhow::bail!("no flavor with a matching version to bump; use --flavor to pick one");
    }

    let mut plans = Vec::with_capacity(flavors.len());
    for flavor in flavors {
        let version = current
            .get(flavor)
            .with_context(|| format!("flavor '{}' has no version info in the file", flavor))?;
        let next_name = transition(&version.name)?;
        let next_code = code_override.or_else(|| version.next_code());
        plans.push(BumpPlan {
            flavor: flavor.clone(),
            current: *version,
            next: Version::new(next_name, next_code),
        });
    }
    Ok(plans)
}

/// Collect a plan into the sparse patch set handed to the adapter
pub fn plan_to_set(plans: &[BumpPlan]) -> VersionSet {
    plans
        .iter()
        .map(|plan| (plan.flavor.clone(), plan.next))
        .collect()
}

/// Report the planned transitions and, unless this is a dry run, patch the
/// version file
pub fn execute_plans(
    project: &Project,
    plans: &[BumpPlan],
    cli: &crate::cli::Cli,
    dry_run: bool,
) -> anyhow::Result<()> {
    use crate::cli::output;
    use crate::cli::OutputFormat;

    if !dry_run {
        project
            .adapter
            .apply(&project.version_file, &plan_to_set(plans))
            .with_context(|| {
                format!(
                    "failed to update versions in {}",
                    display_path(&project.version_file)
                )
            })?;
    }

    match cli.format {
        OutputFormat::Json => {
            let flavors: Vec<serde_json::Value> = plans
                .iter()
                .map(|plan| {
                    serde_json::json!({
                        "flavor": plan.flavor,
                        "current": plan.current.name.to_string(),
                        "next": plan.next.name.to_string(),
                        "code": plan.next.code,
                    })
                })
                .collect();
            let result = serde_json::json!({
                "file": display_path(&project.version_file),
                "applied": !dry_run,
                "flavors": flavors,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => {
            if cli.quiet {
                for plan in plans {
                    println!("{}", plan.next.name);
                }
            } else {
                for plan in plans {
                    println!(
                        "  {}: {} -> {}",
                        plan.flavor,
                        plan.current,
                        output::version_style().apply_to(&plan.next)
                    );
                }
                if dry_run {
                    println!("Dry run, {} left unchanged", display_path(&project.version_file));
                } else {
                    output::success(&format!("Updated {}", display_path(&project.version_file)));
                }
            }
        }
    }
    Ok(())
}

fn display_path(path: &std::path::Path) -> String {
    path.display().to_string()
}
