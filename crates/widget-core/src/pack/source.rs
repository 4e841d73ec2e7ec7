//! Remote or local pack source
//!
//! Remote packs are single zip files fetched over HTTP; local packs are
//! plain directories used during template development (`--template-dir`).

use anyhow::{Context, Result};
use std::path::PathBuf;
use url::Url;

use super::TemplatePack;

/// Default remote pack URL.
pub const DEFAULT_PACK_URL: &str =
    "https://raw.githubusercontent.com/appsngen/widget-templates/main/web-widget.zip";

/// Environment variable overriding the remote pack URL.
pub const PACK_URL_ENV: &str = "WIDGET_TEMPLATE_URL";

/// Where the template pack comes from.
#[derive(Debug, Clone)]
pub enum PackSource {
    Remote(Url),
    Local(PathBuf),
}

impl PackSource {
    /// Remote source from the default URL, honoring the env override.
    pub fn remote_default() -> Result<Self> {
        let url_str =
            std::env::var(PACK_URL_ENV).unwrap_or_else(|_| DEFAULT_PACK_URL.to_string());
        let url = Url::parse(&url_str)
            .with_context(|| format!("Invalid template pack URL: {}", url_str))?;
        Ok(Self::Remote(url))
    }

    /// Local source for a template directory.
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }

    /// Load the pack from this source.
    pub async fn load(&self, user_agent: &str) -> Result<TemplatePack> {
        match self {
            PackSource::Remote(url) => {
                let client = reqwest::Client::builder()
                    .user_agent(user_agent)
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new());

                let response = client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch template pack from {}", url))?;

                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch template pack from {}: HTTP {}",
                        url,
                        response.status()
                    );
                }

                let bytes = response.bytes().await?;
                TemplatePack::from_zip(&bytes)
            }
            PackSource::Local(path) => TemplatePack::from_dir(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_default_parses_the_builtin_url() {
        // The env override is per-process; only exercise the default here.
        if std::env::var(PACK_URL_ENV).is_err() {
            let source = PackSource::remote_default().unwrap();
            match source {
                PackSource::Remote(url) => assert!(url.as_str().ends_with(".zip")),
                PackSource::Local(_) => panic!("expected a remote source"),
            }
        }
    }

    #[tokio::test]
    async fn test_local_load_of_missing_directory_fails() {
        let source = PackSource::local(PathBuf::from("/definitely/not/here"));
        assert!(source.load("widget-tools").await.is_err());
    }
}
