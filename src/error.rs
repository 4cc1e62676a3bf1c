use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing webhook in notify settings")]
    MissingWebhook,

    #[error("invalid webhook url '{url}'")]
    InvalidWebhook {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported webhook scheme '{scheme}' in '{url}'")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("unable to parse notify settings: {0}")]
    Parse(#[from] serde_json5::Error),
}

/// Failure of a notified call.
///
/// `Call` carries the wrapped function's own error untouched. `Delivery` is a
/// webhook delivery failure that stopped the run.
#[derive(Debug, Error)]
pub enum NotifyError<E, S = anyhow::Error> {
    #[error("{0}")]
    Call(E),

    #[error("unable to send notification: {0}")]
    Delivery(S),
}

impl<E> NotifyError<E> {
    pub fn into_call_error(self) -> Option<E> {
        match self {
            Self::Call(e) => Some(e),
            Self::Delivery(_) => None,
        }
    }
}
