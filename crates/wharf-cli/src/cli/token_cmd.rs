use super::*;

pub(super) fn handle_token(args: TokenArgs, host: &str) -> anyhow::Result<()> {
    let account = auth::account_key(host);
    match args.command {
        TokenCommands::Set(args) => {
            auth::set_token(&account, &args.token)?;
            auth::get_token(&account).context("read token from keyring after write")?;
            info!(account = %account, "stored token");
            println!("Token stored for {account}");
        }
        TokenCommands::Clear => {
            auth::delete_token(&account)?;
            println!("Token removed for {account}");
        }
    }
    Ok(())
}
