use super::*;

pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(command = command_label(&cli.command), "Running command");

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = AppConfig::load(&config_path)?;
    let host = config.remote_provider_url_or_default(cli.host.as_deref());

    match cli.command {
        Commands::Config(args) => handle_config(args, &config_path, config, &host),
        Commands::Token(args) => handle_token(args, &host),
        Commands::Project(args) => handle_project(args, &host).await,
        Commands::Branches(args) => handle_branches(args, &host).await,
        Commands::File(args) => handle_file(args, &host).await,
    }
}

pub(super) fn resolve_token(host: &str) -> anyhow::Result<String> {
    if let Ok(token) = std::env::var(TOKEN_ENV)
        && !token.is_empty()
    {
        return Ok(token);
    }
    auth::get_token(&auth::account_key(host))
        .with_context(|| format!("no token for {host}; set {TOKEN_ENV} or run `token set`"))
}

pub(super) fn build_provider(host: &str) -> anyhow::Result<AzureDevOpsProvider> {
    let token = resolve_token(host)?;
    let provider = AzureDevOpsProvider::new(ProviderConfig::new(token, host));
    info!(provider = provider.kind(), host, "Using remote provider");
    Ok(provider)
}
