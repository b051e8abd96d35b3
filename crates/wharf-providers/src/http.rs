use anyhow::Context;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;
use wharf_core::config::ProviderConfig;

/// Authenticated GET access to a provider REST API rooted at one base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ProviderConfig,
}

impl ApiClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn get_bytes(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> anyhow::Result<Vec<u8>> {
        let response = self.get(segments, query).await?;
        let body = response.bytes().await.context("read response body")?;
        Ok(body.to_vec())
    }

    pub async fn get_json<T>(&self, segments: &[&str], query: &[(&str, &str)]) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.get_bytes(segments, query).await?;
        serde_json::from_slice(&body).context("decode response body")
    }

    async fn get(&self, segments: &[&str], query: &[(&str, &str)]) -> anyhow::Result<Response> {
        let url = build_url(self.config.remote_provider_url(), segments, query)?;
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .basic_auth("", Some(self.config.token()))
            .send()
            .await
            .context("send request")?
            .error_for_status()
            .context("response status")?;
        Ok(response)
    }
}

/// Appends each of `segments` to the base URL's path, percent-encoding them
/// so a `/`, `?` or `#` inside a segment stays part of that segment.
pub fn build_url(base: &str, segments: &[&str], query: &[(&str, &str)]) -> anyhow::Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("parse url {base}"))?;
    url.path_segments_mut()
        .map_err(|()| anyhow::anyhow!("url {base} cannot be a base"))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}
