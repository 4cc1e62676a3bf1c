use crate::discord::WebhookTarget;
use crate::error::ConfigError;
use crate::message::{MessageInput, DEFAULT_SEPARATOR};
use serde::Deserialize;
use serde_json::Value;

const DEFAULT_ERROR_MESSAGE: &str = "ERROR:";

const WEBHOOK_VAR: &str = "DCALERTS_WEBHOOK";
const BEFORE_VAR: &str = "DCALERTS_BEFORE";
const AFTER_VAR: &str = "DCALERTS_AFTER";
const SEPARATOR_VAR: &str = "DCALERTS_SEPARATOR";
const SEND_ERROR_VAR: &str = "DCALERTS_SEND_ERROR";
const ERROR_MESSAGE_VAR: &str = "DCALERTS_ERROR_MESSAGE";

#[derive(Debug, Clone)]
pub struct NotifySettings {
    webhook: WebhookTarget,
    before: Option<MessageInput>,
    after: Option<MessageInput>,
    separator: String,
    send_error: bool,
    error_message: MessageInput,
}

// Older configs used `webhook_url`, `message_before`, `message_after` and `list_item_sep`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default, alias = "webhook_url")]
    webhook: Option<String>,
    #[serde(default, alias = "message_before")]
    before: Option<Value>,
    #[serde(default, alias = "message_after")]
    after: Option<Value>,
    #[serde(default, alias = "list_item_sep")]
    separator: Option<String>,
    #[serde(default, alias = "sendError")]
    send_error: Option<bool>,
    #[serde(default, alias = "errorMessage")]
    error_message: Option<Value>,
}

impl NotifySettings {
    pub fn new(webhook: WebhookTarget) -> Self {
        Self {
            webhook,
            before: None,
            after: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            send_error: false,
            error_message: DEFAULT_ERROR_MESSAGE.into(),
        }
    }

    pub fn with_before(mut self, message: impl Into<MessageInput>) -> Self {
        self.before = Some(message.into());
        self
    }

    pub fn with_after(mut self, message: impl Into<MessageInput>) -> Self {
        self.after = Some(message.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_send_error(mut self, send_error: bool) -> Self {
        self.send_error = send_error;
        self
    }

    pub fn with_error_message(mut self, message: impl Into<MessageInput>) -> Self {
        self.error_message = message.into();
        self
    }

    pub fn webhook(&self) -> &WebhookTarget {
        &self.webhook
    }

    /// The before message, if there is a non-empty one.
    pub fn before(&self) -> Option<&MessageInput> {
        self.before.as_ref().filter(|m| !m.is_empty())
    }

    /// The after message, if there is a non-empty one.
    pub fn after(&self) -> Option<&MessageInput> {
        self.after.as_ref().filter(|m| !m.is_empty())
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn send_error(&self) -> bool {
        self.send_error
    }

    pub fn error_message(&self) -> &MessageInput {
        &self.error_message
    }

    pub fn from_json5(contents: &str) -> Result<Self, ConfigError> {
        let file = serde_json5::from_str::<SettingsFile>(contents)?;

        let webhook = file.webhook.ok_or(ConfigError::MissingWebhook)?;
        let mut settings = Self::new(WebhookTarget::parse(&webhook)?);

        settings.before = file.before.and_then(message_from_value);
        settings.after = file.after.and_then(message_from_value);
        if let Some(separator) = file.separator {
            settings.separator = separator;
        }
        settings.send_error = file.send_error.unwrap_or_default();
        if let Some(error_message) = file.error_message.and_then(message_from_value) {
            settings.error_message = error_message;
        }

        Ok(settings)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let webhook = lookup(WEBHOOK_VAR).ok_or(ConfigError::MissingWebhook)?;
        let mut settings = Self::new(WebhookTarget::parse(&webhook)?);

        settings.before = lookup(BEFORE_VAR).map(MessageInput::from);
        settings.after = lookup(AFTER_VAR).map(MessageInput::from);
        if let Some(separator) = lookup(SEPARATOR_VAR) {
            settings.separator = separator;
        }
        if let Some(send_error) = lookup(SEND_ERROR_VAR) {
            settings.send_error = parse_flag(SEND_ERROR_VAR, &send_error)?;
        }
        if let Some(error_message) = lookup(ERROR_MESSAGE_VAR) {
            settings.error_message = error_message.into();
        }

        Ok(settings)
    }
}

fn message_from_value(value: Value) -> Option<MessageInput> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.into()),
        // Null elements are skipped outright, separator included.
        Value::Array(items) => Some(MessageInput::List(
            items.into_iter().filter_map(message_from_value).collect(),
        )),
        other => Some(other.to_string().into()),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
