use std::{sync::Arc, time::Duration};

use poise::serenity_prelude::{ChannelId, Http, Mention, Message, UserId};
use tracing::{debug, warn};

use crate::{
    errors::CommandError,
    framework::data::Data,
    game::Verdict,
};

/// How long game feedback stays up before it is deleted.
const FEEDBACK_TTL: Duration = Duration::from_secs(5);

/// Feeds a chat message to the sequence game and carries out the verdicts:
/// affirmations for correct guesses, deletion plus a warning for wrong
/// ones. The game lock is held only for the state transition; all Discord
/// traffic happens after it is released.
pub async fn sequence_game(
    http: &Arc<Http>,
    data: &Data,
    msg: &Message,
) -> Result<(), CommandError> {
    let (verdicts, expected) = {
        let mut game = data.game();

        if !game.accepts(msg.channel_id) {
            return Ok(());
        }

        let verdicts = game.observe(msg.author.id, &msg.content);
        (verdicts, game.expected())
    };

    debug!(?verdicts, expected, author = %msg.author.id, "sequence game verdicts");

    let mut deleted = false;

    for verdict in verdicts {
        match verdict {
            Verdict::Correct => {
                send_transient(http, msg.channel_id, affirmation()).await;
            }
            Verdict::Wrong {
                expected,
                remaining,
            } => {
                delete_once(http, msg, &mut deleted).await;
                send_transient(http, msg.channel_id, wrong_message(expected, remaining)).await;
            }
            Verdict::MaxWarnings => {
                delete_once(http, msg, &mut deleted).await;
                send_transient(http, msg.channel_id, max_warnings_message(msg.author.id)).await;
            }
            Verdict::Noise => {
                delete_once(http, msg, &mut deleted).await;
            }
        }
    }

    Ok(())
}

const fn affirmation() -> &'static str {
    "Correct!"
}

fn wrong_message(expected: i64, remaining: u32) -> String {
    format!(
        "⚠️ Wrong number! The next number should be **{expected}**. \
        You have {remaining} warning(s) left."
    )
}

fn max_warnings_message(author: UserId) -> String {
    format!(
        "{}, you have reached the maximum number of warnings.",
        Mention::from(author)
    )
}

/// Deletes the offending message, at most once per inbound message.
/// Best effort: a failure is logged and the game moves on.
async fn delete_once(http: &Arc<Http>, msg: &Message, deleted: &mut bool) {
    if *deleted {
        return;
    }
    *deleted = true;

    if let Err(err) = msg.delete(http).await {
        warn!(%err, message = %msg.id, "failed to delete message");
    }
}

/// Sends feedback and schedules its deletion once [`FEEDBACK_TTL`] is up.
/// The deletion runs as a detached task; either half failing is logged
/// and swallowed.
async fn send_transient(http: &Arc<Http>, channel: ChannelId, text: impl Into<String>) {
    match channel.say(http, text).await {
        Ok(sent) => {
            let http = Arc::clone(http);

            tokio::spawn(async move {
                tokio::time::sleep(FEEDBACK_TTL).await;

                if let Err(err) = sent.delete(&http).await {
                    warn!(%err, message = %sent.id, "failed to delete feedback message");
                }
            });
        }
        Err(err) => warn!(%err, %channel, "failed to send feedback message"),
    }
}
