use crate::error::ConfigError;
use anyhow::Result;
use reqwest::Url;
use serde_json::{json, Value};
use std::fmt::Formatter;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookTarget(Url);

impl WebhookTarget {
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(url.trim()).map_err(|source| ConfigError::InvalidWebhook {
            url: url.to_string(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                url: url.to_string(),
                scheme: parsed.scheme().to_string(),
            });
        }

        Ok(Self(parsed))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl FromStr for WebhookTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for WebhookTarget {
    type Error = ConfigError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl std::fmt::Display for WebhookTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delivers already-formatted message content to a webhook.
pub trait Transport {
    fn post(&self, target: &WebhookTarget, content: &str) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, target: &WebhookTarget, content: &str) -> Result<()> {
        (**self).post(target, content)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiscordTransport {
    client: reqwest::blocking::Client,
}

impl DiscordTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    fn call_webhook(&self, target: &WebhookTarget, body: Value) -> Result<()> {
        let response = self.client.post(target.url().clone()).json(&body).send()?;

        // Discord's reply is not part of the contract; only note it.
        let status = response.status();
        if status.is_success() {
            debug!(%status, "webhook accepted message");
        } else {
            warn!(%status, "webhook rejected message");
        }

        Ok(())
    }
}

impl Transport for DiscordTransport {
    fn post(&self, target: &WebhookTarget, content: &str) -> Result<()> {
        debug!(len = content.len(), "sending webhook message");

        self.call_webhook(target, json!({ "content": content }))
    }
}

pub fn send_message(target: &WebhookTarget, message: &str) -> Result<()> {
    DiscordTransport::new().post(target, message)
}
