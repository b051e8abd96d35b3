use super::*;
use std::path::Path;

pub(super) fn handle_config(
    args: ConfigArgs,
    path: &Path,
    mut config: AppConfig,
    host: &str,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommands::SetUrl(args) => {
            config.remote_provider_url = Some(args.url.trim_end_matches('/').to_string());
            config.save(path)?;
            println!("Config saved to {}", path.display());
        }
        ConfigCommands::Show => {
            println!("Config: {}", path.display());
            println!("Remote provider URL: {host}");
        }
    }
    Ok(())
}
