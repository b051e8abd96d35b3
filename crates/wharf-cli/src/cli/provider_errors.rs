use super::*;

pub(super) fn map_provider_error<T>(group: &str, err: anyhow::Error) -> anyhow::Result<T> {
    if let Some(status) = provider_status(&err)
        && let Some(message) = azdo_status_message(group, status)
    {
        return Err(err.context(message));
    }
    Err(err)
}

fn provider_status(err: &anyhow::Error) -> Option<StatusCode> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<reqwest::Error>())
        .and_then(|cause| cause.status())
}

pub(super) fn azdo_status_message(group: &str, status: StatusCode) -> Option<String> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Some(format!(
            "Azure DevOps authentication failed for {group} (HTTP {status}). Check your PAT.",
        )),
        StatusCode::NOT_FOUND => Some(format!(
            "Azure DevOps resource not found in {group} (HTTP {status}). Check organization/project/repository.",
        )),
        _ => None,
    }
}
