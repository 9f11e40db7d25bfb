use std::sync::Arc;

use poise::serenity_prelude::User;
use tracing::{error, info, instrument, warn};

use super::LogCommands;
use crate::utils::poise::{CommandResult, Context, ContextExt};

/// Unbans all users from the server.
#[instrument(skip_all)]
#[poise::command(slash_command, guild_only)]
pub async fn unbanall(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    ctx.defer_ephemeral().await?;

    if !ctx.author_can_manage_guild().await {
        ctx.say("You do not have permission to unban users.").await?;
        return Ok(());
    }

    let guild_id = ctx.guild_id().expect("command is guild only");
    let http = ctx.serenity_context().http.clone();

    let bans = match guild_id.bans(&http, None, None).await {
        Ok(bans) => bans,
        Err(err) => {
            error!(%err, "failed to fetch ban list");
            ctx.say("An error occurred while fetching bans.").await?;
            return Ok(());
        }
    };

    if bans.is_empty() {
        ctx.say("There are no banned users.").await?;
        return Ok(());
    }

    info!(count = bans.len(), "unbanning all users");

    // fire and forget, one task per ban; the reply does not wait for them
    for ban in bans {
        let http = Arc::clone(&http);
        let user = ban.user.id;

        tokio::spawn(async move {
            if let Err(err) = guild_id.unban(&http, user).await {
                warn!(%err, %user, "failed to unban user");
            }
        });
    }

    ctx.say("All users have been unbanned.").await?;

    Ok(())
}

/// Resets warnings for a specific user.
#[instrument(skip_all)]
#[poise::command(slash_command, guild_only)]
pub async fn resetwarn(
    ctx: Context<'_>,
    #[description = "The user whose warnings should be reset"] user: User,
) -> CommandResult {
    ctx.log_command().await;
    ctx.defer_ephemeral().await?;

    if !ctx.author_can_manage_guild().await {
        ctx.say("You do not have permission to reset warnings.")
            .await?;
        return Ok(());
    }

    let cleared = ctx.data().game().clear_warnings(user.id);

    if cleared {
        info!(user = %user.id, "warnings reset");
        ctx.say(format!("Warnings for {} have been reset.", user.tag()))
            .await?;
    } else {
        ctx.say(format!("{} has no warnings.", user.tag())).await?;
    }

    Ok(())
}
