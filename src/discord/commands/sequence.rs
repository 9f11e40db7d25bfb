use tracing::{info, instrument};

use super::LogCommands;
use crate::utils::poise::{CommandResult, Context, ContextExt};

/// Sets this channel as the number sequence game channel.
#[instrument(skip_all)]
#[poise::command(slash_command, guild_only)]
pub async fn setnumberchannel(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    ctx.defer_ephemeral().await?;

    if !ctx.author_can_manage_guild().await {
        ctx.say("You do not have permission to set the channel.")
            .await?;
        return Ok(());
    }

    let channel = ctx.channel_id();
    ctx.data().game().set_channel(channel);
    info!(%channel, "sequence game channel set, count restarted");

    ctx.say("This channel is now set for the number sequence game.")
        .await?;

    Ok(())
}

/// Resets the number sequence to a custom start limit.
#[instrument(skip_all)]
#[poise::command(slash_command, guild_only)]
pub async fn resetsequence(
    ctx: Context<'_>,
    #[description = "The custom starting number for the sequence"] start: Option<i64>,
) -> CommandResult {
    ctx.log_command().await;
    ctx.defer_ephemeral().await?;

    if !ctx.author_can_manage_guild().await {
        ctx.say("You do not have permission to reset the sequence.")
            .await?;
        return Ok(());
    }

    let start = ctx.data().game().reset(start);
    info!(start, "sequence reset");

    ctx.say(format!("The number sequence has been reset to {start}."))
        .await?;

    Ok(())
}
