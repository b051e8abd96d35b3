use super::*;
use std::path::PathBuf;

pub(super) const TOKEN_ENV: &str = "AZURE_DEVOPS_TOKEN";

#[derive(Parser)]
#[command(author, version, about)]
pub(super) struct Cli {
    #[arg(
        long,
        global = true,
        help = "Azure DevOps base URL (overrides the configured one)"
    )]
    pub(super) host: Option<String>,
    #[arg(long, global = true, help = "Config file path")]
    pub(super) config: Option<PathBuf>,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Manage config")]
    Config(ConfigArgs),
    #[command(about = "Manage auth tokens")]
    Token(TokenArgs),
    #[command(about = "Resolve a group/project pair into a Wharf project")]
    Project(ProjectArgs),
    #[command(about = "List branches of a project")]
    Branches(BranchesArgs),
    #[command(about = "Print a file from the project's default branch")]
    File(FileArgs),
}

#[derive(Parser)]
pub(super) struct ConfigArgs {
    #[command(subcommand)]
    pub(super) command: ConfigCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ConfigCommands {
    #[command(about = "Set the Azure DevOps base URL")]
    SetUrl(SetUrlArgs),
    #[command(about = "Show the effective config")]
    Show,
}

#[derive(Parser)]
pub(super) struct SetUrlArgs {
    #[arg(long)]
    pub(super) url: String,
}

#[derive(Parser)]
pub(super) struct TokenArgs {
    #[command(subcommand)]
    pub(super) command: TokenCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum TokenCommands {
    #[command(about = "Store a PAT for the provider host")]
    Set(SetTokenArgs),
    #[command(about = "Remove the stored PAT for the provider host")]
    Clear,
}

#[derive(Parser)]
pub(super) struct SetTokenArgs {
    #[arg(long)]
    pub(super) token: String,
}

#[derive(Parser)]
pub(super) struct ProjectSelector {
    #[arg(long, help = "Group as organization/project")]
    pub(super) group: String,
    #[arg(long, help = "Repository name")]
    pub(super) project: String,
}

#[derive(Parser)]
pub(super) struct ProjectArgs {
    #[command(flatten)]
    pub(super) selector: ProjectSelector,
    #[arg(long)]
    pub(super) json: bool,
}

#[derive(Parser)]
pub(super) struct BranchesArgs {
    #[command(flatten)]
    pub(super) selector: ProjectSelector,
}

#[derive(Parser)]
pub(super) struct FileArgs {
    #[command(flatten)]
    pub(super) selector: ProjectSelector,
    #[arg(long, default_value = wharf_core::provider::WHARF_CI_FILE)]
    pub(super) file: String,
}

pub(super) fn command_label(command: &Commands) -> &'static str {
    match command {
        Commands::Config(_) => "config",
        Commands::Token(_) => "token",
        Commands::Project(_) => "project",
        Commands::Branches(_) => "branches",
        Commands::File(_) => "file",
    }
}
