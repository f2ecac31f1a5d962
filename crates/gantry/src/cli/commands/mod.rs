//! CLI commands

mod bump;
mod completions;
mod finalize;
mod init;
mod version;

pub use bump::BumpCommand;
pub use completions::CompletionsCommand;
pub use finalize::FinalizeCommand;
pub use init::InitCommand;
pub use version::VersionCommand;
