//! Discord webhook notifications around a unit of work, plus markdown helpers
//! for building the messages.

pub mod clock;
pub mod config;
pub mod discord;
pub mod error;
pub mod markdown;
pub mod message;
pub mod notify;

pub use config::NotifySettings;
pub use discord::{send_message, DiscordTransport, Transport, WebhookTarget};
pub use error::{ConfigError, NotifyError};
pub use message::{format, MessageInput, DEFAULT_SEPARATOR};
pub use notify::{notify, Notifier};
