#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod discord;

mod errors;

mod framework;

mod game;

mod utils;

use poise::serenity_prelude::{self as serenity, GatewayIntents};

#[allow(unused_imports)]
use tracing::{debug, info, trace};
use tracing_unwrap::ResultExt;

use framework::{data::Data, Config};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    framework::logging::init_tracing();

    let config = Config::load().expect_or_log("configuration could not be loaded");
    let token = config.token().to_owned();

    let data = Data::new(config);
    let framework = framework::poise::build(data);

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::Client::builder(token, intents)
        .framework(framework)
        .await
        .expect_or_log("client should be valid");

    client
        .start()
        .await
        .expect_or_log("client should not return error");
}
