use crate::config::NotifySettings;
use crate::discord::{DiscordTransport, Transport};
use crate::error::NotifyError;
use crate::markdown::code_block;
use crate::message::{format, MessageInput};
use anyhow::Result;
use std::convert::Infallible;
use std::fmt::Display;
use tracing::{debug, warn};

/// Runs a unit of work between webhook notifications.
pub struct Notifier<T: Transport = DiscordTransport> {
    settings: NotifySettings,
    transport: T,
}

impl Notifier {
    pub fn new(settings: NotifySettings) -> Self {
        Self::with_transport(settings, DiscordTransport::new())
    }
}

impl<T: Transport> Notifier<T> {
    pub fn with_transport(settings: NotifySettings, transport: T) -> Self {
        Self {
            settings,
            transport,
        }
    }

    pub fn settings(&self) -> &NotifySettings {
        &self.settings
    }

    pub fn send(&self, message: &MessageInput) -> Result<()> {
        let content = format(message, self.settings.separator());

        self.transport.post(self.settings.webhook(), &content)
    }

    /// Runs `f`, notifying before and after it, or on failure if `send_error` is set.
    ///
    /// A notification that fails to send is logged and skipped, so the result is
    /// always whatever `f` returned.
    pub fn run<R, E: Display>(&self, f: impl FnOnce() -> Result<R, E>) -> Result<R, E> {
        let outcome = self.drive(f, |message| {
            if let Err(e) = self.send(message) {
                warn!("unable to send notification: {:?}", e);
            }
            Ok::<_, Infallible>(())
        });

        outcome.map_err(|e| match e {
            NotifyError::Call(e) => e,
            NotifyError::Delivery(never) => match never {},
        })
    }

    /// Like [`Notifier::run`], but a notification that fails to send stops the run
    /// and is returned as [`NotifyError::Delivery`].
    pub fn try_run<R, E: Display>(
        &self,
        f: impl FnOnce() -> Result<R, E>,
    ) -> Result<R, NotifyError<E>> {
        self.drive(f, |message| self.send(message))
    }

    fn drive<R, E: Display, S>(
        &self,
        f: impl FnOnce() -> Result<R, E>,
        deliver: impl Fn(&MessageInput) -> Result<(), S>,
    ) -> Result<R, NotifyError<E, S>> {
        if let Some(before) = self.settings.before() {
            deliver(before).map_err(NotifyError::<E, S>::Delivery)?;
        }

        match f() {
            Ok(value) => {
                if let Some(after) = self.settings.after() {
                    deliver(after).map_err(NotifyError::<E, S>::Delivery)?;
                }
                Ok(value)
            }
            Err(e) => {
                debug!("notified call failed: {}", e);

                if self.settings.send_error() {
                    deliver(&self.error_report(&e)).map_err(NotifyError::<E, S>::Delivery)?;
                }
                Err(NotifyError::Call(e))
            }
        }
    }

    fn error_report(&self, error: &impl Display) -> MessageInput {
        MessageInput::List(vec![
            self.settings.error_message().clone(),
            code_block(error.to_string(), None).into(),
        ])
    }
}

/// Runs `f` with best-effort notifications sent through Discord.
pub fn notify<R, E: Display>(
    settings: NotifySettings,
    f: impl FnOnce() -> Result<R, E>,
) -> Result<R, E> {
    Notifier::new(settings).run(f)
}
