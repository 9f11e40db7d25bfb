mod moderation;
mod sequence;

use moderation::{resetwarn, unbanall};
use sequence::{resetsequence, setnumberchannel};

use tracing::info;

use crate::utils::poise::Command;

pub fn list() -> Vec<Command> {
    vec![
        setnumberchannel(),
        resetsequence(),
        unbanall(),
        resetwarn(),
    ]
}

trait LogCommands {
    async fn log_command(&self);
}

impl LogCommands for crate::utils::Context<'_> {
    async fn log_command(&self) {
        let channel = self
            .channel_id()
            .name(self.http())
            .await
            .map_or("dms".to_string(), |c| format!("#{c}"));
        info!(
            "@{} ({}): {}",
            self.author().name,
            channel,
            self.invocation_string()
        );
    }
}
