use std::{future::Future, pin::Pin};

use poise::{
    serenity_prelude::{self as serenity, FullEvent},
    FrameworkContext,
};

use crate::{discord::watchers, errors::CommandError};

use super::data::Data;

async fn event_handler(
    serenity_ctx: &serenity::Context,
    event: &FullEvent,
    _framework_ctx: FrameworkContext<'_, Data, CommandError>,
    data: &Data,
) -> Result<(), CommandError> {
    match event {
        FullEvent::Message { new_message: msg } if !msg.author.bot => {
            watchers::sequence_game(&serenity_ctx.http, data, msg).await?;
        }
        _ => (),
    }

    Ok(())
}

pub fn poise<'a>(
    serenity_ctx: &'a serenity::Context,
    event: &'a FullEvent,
    framework_ctx: FrameworkContext<'a, Data, CommandError>,
    data: &'a Data,
) -> Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send + 'a>> {
    Box::pin(event_handler(serenity_ctx, event, framework_ctx, data))
}
