use crate::framework::data::Data;

use poise::{serenity_prelude as serenity, CreateReply};

pub type Context<'a> = poise::Context<'a, Data, crate::errors::CommandError>;

pub type Error = crate::errors::CommandError;
pub type Command = poise::Command<Data, Error>;
pub type CommandResult = Result<(), Error>;

pub trait ContextExt {
    async fn reply_ephemeral(
        &self,
        text: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error>;

    /// Whether the invoking member holds Manage Server. Delegated entirely
    /// to the permission set the platform attaches to the interaction.
    async fn author_can_manage_guild(&self) -> bool;
}

impl ContextExt for Context<'_> {
    async fn reply_ephemeral(
        &self,
        text: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error> {
        let builder = CreateReply::default().reply(true).ephemeral(true).content(text);
        self.send(builder).await
    }

    async fn author_can_manage_guild(&self) -> bool {
        self.author_member().await.is_some_and(|member| {
            member
                .permissions
                .is_some_and(serenity::Permissions::manage_guild)
        })
    }
}
