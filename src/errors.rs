use poise::{serenity_prelude as serenity, BoxFuture, FrameworkError};

use thiserror::Error as ThisError;
use tracing::{error, error_span, Instrument};

use crate::{framework::data::Data, utils::poise::ContextExt};

/// Everything a command or watcher can fail with. Permission denials are
/// not errors; they are ordinary replies.
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("serenity error: {0}")]
    Serenity(#[from] serenity::Error),
}

pub fn handle_framework_error(err: FrameworkError<'_, Data, CommandError>) -> BoxFuture<'_, ()> {
    Box::pin(async {
        match err {
            FrameworkError::Command { error, ctx, .. } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);

                async {
                    error!(%error, "command failed");

                    if let Err(err) = ctx
                        .reply_ephemeral("something went wrong running that command")
                        .await
                    {
                        error!(%err, "failed to report command error to invoker");
                    }
                }
                .instrument(span)
                .await;
            }
            other => {
                if let Err(err) = poise::builtins::on_error(other).await {
                    error!(%err, "failed to handle framework error");
                }
            }
        };
    })
}
