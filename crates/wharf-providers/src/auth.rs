use anyhow::Context;
use keyring::Entry;

const SERVICE: &str = "wharf-provider-azuredevops";

pub fn account_key(host: &str) -> String {
    format!("azdo:{}", host.trim_end_matches('/'))
}

pub fn get_token(account: &str) -> anyhow::Result<String> {
    let entry = Entry::new(SERVICE, account).context("open keyring entry")?;
    entry
        .get_password()
        .with_context(|| format!("read token for {account} from keyring"))
}

pub fn set_token(account: &str, token: &str) -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE, account).context("open keyring entry")?;
    entry
        .set_password(token)
        .with_context(|| format!("write token for {account} to keyring"))
}

pub fn delete_token(account: &str) -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE, account).context("open keyring entry")?;
    entry
        .delete_credential()
        .with_context(|| format!("delete token for {account} from keyring"))
}
