use poise::serenity_prelude::{ActivityData, GuildId};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

pub const TOKEN_VAR: &str = "TALLYBOT_TOKEN";
pub const CONFIG_PATH_VAR: &str = "TALLYBOT_TOML";
const DEFAULT_CONFIG_PATH: &str = "./tallybot.toml";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no bot token: set the {TOKEN_VAR} environment variable")]
    MissingToken,

    #[error("problem loading config file: {0}")]
    File(#[from] ::config::ConfigError),
}

/// Runtime configuration: the token from the environment plus the optional
/// `tallybot.toml` file. The file being absent is fine, the token missing
/// is not.
#[derive(Debug, Clone)]
pub struct Config {
    token: String,
    pub bot: BotConfig,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        let path = if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            info!(path, "looking for config file with {CONFIG_PATH_VAR}...");
            path
        } else {
            DEFAULT_CONFIG_PATH.to_owned()
        };

        let file = if std::path::Path::new(&path).exists() {
            let file: ConfigFile = ::config::Config::builder()
                .add_source(::config::File::new(&path, ::config::FileFormat::Toml))
                .build()?
                .try_deserialize()?;

            info!("config loaded");
            file
        } else {
            warn!(path, "no config file found, using defaults");
            ConfigFile::default()
        };

        // deliberately not logged
        let token = std::env::var(TOKEN_VAR).map_err(|_| Error::MissingToken)?;

        Ok(Self {
            token,
            bot: file.bot,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
struct ConfigFile {
    #[serde(default)]
    bot: BotConfig,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct BotConfig {
    testing_server: Option<GuildId>,
    activity: Option<String>,
}

impl BotConfig {
    pub fn testing_server(&self) -> Option<&GuildId> {
        if self.testing_server.is_none() {
            debug!("no testing server set in config, commands will only be registered globally");
        }

        self.testing_server.as_ref()
    }

    pub fn activity(&self) -> Option<ActivityData> {
        let activity = self.activity.as_deref()?;

        if activity.is_empty() {
            warn!("bot.activity provided in config as empty string, defaulting to none");
            return None;
        }

        let parsed = if let Some(name) = activity.strip_prefix("playing ") {
            ActivityData::playing(name)
        } else if let Some(name) = activity.strip_prefix("listening to ") {
            ActivityData::listening(name)
        } else if let Some(name) = activity.strip_prefix("watching ") {
            ActivityData::watching(name)
        } else if let Some(name) = activity.strip_prefix("competing in ") {
            ActivityData::competing(name)
        } else {
            error!("bot.activity in config could not be parsed - must start with `playing`, `listening to`, `watching` or `competing in`");
            warn!("disabling bot activity");
            return None;
        };

        debug!("bot.activity parsed as {:?}: {}", parsed.kind, parsed.name);

        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::ActivityType;
    use pretty_assertions::assert_eq;

    use super::BotConfig;

    fn config_with_activity(activity: &str) -> BotConfig {
        BotConfig {
            testing_server: None,
            activity: Some(activity.to_owned()),
        }
    }

    #[test]
    fn activity_parses_each_verb() {
        let playing = config_with_activity("playing with numbers")
            .activity()
            .unwrap();
        assert_eq!(playing.kind, ActivityType::Playing);
        assert_eq!(playing.name, "with numbers");

        let listening = config_with_activity("listening to the count")
            .activity()
            .unwrap();
        assert_eq!(listening.kind, ActivityType::Listening);
        assert_eq!(listening.name, "the count");

        let watching = config_with_activity("watching the channel")
            .activity()
            .unwrap();
        assert_eq!(watching.kind, ActivityType::Watching);
        assert_eq!(watching.name, "the channel");

        let competing = config_with_activity("competing in counting")
            .activity()
            .unwrap();
        assert_eq!(competing.kind, ActivityType::Competing);
        assert_eq!(competing.name, "counting");
    }

    #[test]
    fn unknown_or_empty_activity_is_disabled() {
        assert!(config_with_activity("vibing").activity().is_none());
        assert!(config_with_activity("").activity().is_none());
        assert!(BotConfig::default().activity().is_none());
    }
}
