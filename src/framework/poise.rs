use tracing::{error, info, trace};

use crate::{discord, errors};

use super::{data::Data, event_handler};

pub fn build(data: Data) -> poise::Framework<Data, errors::CommandError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: discord::commands::list(),
            on_error: errors::handle_framework_error,
            event_handler: event_handler::poise,
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("logged in as {}", ready.user.name);

                let commands = framework.options().commands.as_ref();

                if let Some(guild_id) = data.config().bot.testing_server() {
                    if let Err(err) =
                        poise::builtins::register_in_guild(ctx, commands, *guild_id).await
                    {
                        error!(%err, %guild_id, "failed to register commands in testing server");
                    }
                }

                if let Err(err) = poise::builtins::register_globally(ctx, commands).await {
                    error!(%err, "failed to register commands globally");
                }

                if let Some(activity) = data.config().bot.activity() {
                    ctx.set_activity(Some(activity));
                }

                trace!("finished setup, accepting commands");

                Ok(data)
            })
        })
        .build()
}
