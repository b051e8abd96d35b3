use anyhow::Context;
use clap::Parser;
use reqwest::StatusCode;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wharf_core::config::{AppConfig, ProviderConfig, default_config_path};
use wharf_core::model::ProjectIdentifier;
use wharf_core::provider::RemoteProvider;
use wharf_providers::AzureDevOpsProvider;
use wharf_providers::auth;

mod app;
mod args;
mod config_cmd;
mod project_cmd;
mod provider_errors;
mod token_cmd;

use args::*;

use app::build_provider;
use config_cmd::handle_config;
use project_cmd::{handle_branches, handle_file, handle_project};
use provider_errors::map_provider_error;
use token_cmd::handle_token;

pub async fn run() -> anyhow::Result<()> {
    app::run().await
}
