use std::time::Duration;

use clap::Parser;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMPLETION_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";
const DEFAULT_VOICE_CHANNEL_NAME: &str = "hampel";
const DEFAULT_GAME_CHANNEL_NAME: &str = "naughtyfications";

/// Command-line arguments, each backed by an equivalently named environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "aybot", about = "aybot is Aybaze's little helper bot.")]
pub struct Args {
    /// The token for Discord integration
    #[arg(short = 't', long, env = "DISCORD_API_TOKEN", hide_env_values = true)]
    pub discord_api_token: Option<String>,

    /// The API key for the text-completion service
    #[arg(long, env = "OPENAI_API_TOKEN", hide_env_values = true)]
    pub openai_api_token: Option<String>,

    /// Base URL of the OpenAI-compatible completion API
    #[arg(long, env = "COMPLETION_API_URL", default_value = DEFAULT_COMPLETION_API_URL)]
    pub completion_api_url: String,

    /// Model used for completions
    #[arg(long, env = "COMPLETION_MODEL", default_value = DEFAULT_COMPLETION_MODEL)]
    pub completion_model: String,

    /// Name of the channel that receives voice notifications
    #[arg(long, env = "VOICE_CHANNEL_NAME", default_value = DEFAULT_VOICE_CHANNEL_NAME)]
    pub voice_channel_name: String,

    /// Name of the channel that receives game notifications
    #[arg(long, env = "GAME_CHANNEL_NAME", default_value = DEFAULT_GAME_CHANNEL_NAME)]
    pub game_channel_name: String,

    /// Hours after which a notification is no longer edited (0 keeps them forever)
    #[arg(long, env = "NOTIFICATION_TTL_HOURS", default_value_t = 24)]
    pub notification_ttl_hours: u64,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_api_token: String,
    pub openai_api_token: String,

    pub completion_api_url: String,
    pub completion_model: String,

    pub voice_channel_name: String,
    pub game_channel_name: String,

    /// `None` disables eviction of notification handles.
    pub notification_ttl: Option<Duration>,
}

impl Config {
    /// Parses the process arguments and environment into a validated config.
    ///
    /// # Returns
    /// - `Ok(Config)` - Both credentials present and channel names non-empty
    /// - `Err(AppError::ConfigErr)` - A credential is missing or a name is blank
    pub fn from_args() -> Result<Self, AppError> {
        Self::try_from(Args::parse())
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let discord_api_token = required(
            args.discord_api_token,
            ConfigError::MissingCredential {
                name: "Discord API token",
                flag: "discord-api-token",
                env: "DISCORD_API_TOKEN",
            },
        )?;
        let openai_api_token = required(
            args.openai_api_token,
            ConfigError::MissingCredential {
                name: "OpenAI API token",
                flag: "openai-api-token",
                env: "OPENAI_API_TOKEN",
            },
        )?;

        if args.voice_channel_name.trim().is_empty() {
            return Err(ConfigError::EmptyChannelName("voice").into());
        }
        if args.game_channel_name.trim().is_empty() {
            return Err(ConfigError::EmptyChannelName("game").into());
        }

        let notification_ttl = match args.notification_ttl_hours {
            0 => None,
            hours => Some(Duration::from_secs(hours * 60 * 60)),
        };

        Ok(Self {
            discord_api_token,
            openai_api_token,
            completion_api_url: args.completion_api_url.trim_end_matches('/').to_string(),
            completion_model: args.completion_model,
            voice_channel_name: args.voice_channel_name,
            game_channel_name: args.game_channel_name,
            notification_ttl,
        })
    }
}

fn required(value: Option<String>, missing: ConfigError) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(missing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Arguments as they are without any flag or environment variable set.
    fn default_args() -> Args {
        Args {
            discord_api_token: None,
            openai_api_token: None,
            completion_api_url: DEFAULT_COMPLETION_API_URL.to_string(),
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            voice_channel_name: DEFAULT_VOICE_CHANNEL_NAME.to_string(),
            game_channel_name: DEFAULT_GAME_CHANNEL_NAME.to_string(),
            notification_ttl_hours: 24,
        }
    }

    /// Tests building a config with only the credentials given.
    ///
    /// Expected: Ok with defaults for everything but the credentials
    #[test]
    fn builds_config_with_defaults() {
        let config = Config::try_from(Args {
            discord_api_token: Some("discord-token".to_string()),
            openai_api_token: Some("openai-key".to_string()),
            ..default_args()
        })
        .unwrap();

        assert_eq!(config.discord_api_token, "discord-token");
        assert_eq!(config.openai_api_token, "openai-key");
        assert_eq!(config.completion_api_url, DEFAULT_COMPLETION_API_URL);
        assert_eq!(config.completion_model, DEFAULT_COMPLETION_MODEL);
        assert_eq!(config.voice_channel_name, "hampel");
        assert_eq!(config.game_channel_name, "naughtyfications");
        assert_eq!(config.notification_ttl, Some(Duration::from_secs(24 * 3600)));
    }

    /// Tests that a blank Discord token is rejected.
    ///
    /// Expected: Err(MissingCredential) naming the Discord flag
    #[test]
    fn rejects_blank_discord_token() {
        let result = Config::try_from(Args {
            discord_api_token: Some("   ".to_string()),
            openai_api_token: Some("openai-key".to_string()),
            ..default_args()
        });

        match result {
            Err(AppError::ConfigErr(ConfigError::MissingCredential { flag, .. })) => {
                assert_eq!(flag, "discord-api-token")
            }
            other => panic!("expected missing credential, got {:?}", other),
        }
    }

    /// Tests that a missing completion key is rejected.
    ///
    /// Expected: Err(MissingCredential) naming the OpenAI variable
    #[test]
    fn rejects_missing_openai_token() {
        let result = Config::try_from(Args {
            discord_api_token: Some("discord-token".to_string()),
            openai_api_token: None,
            ..default_args()
        });

        match result {
            Err(AppError::ConfigErr(ConfigError::MissingCredential { env, .. })) => {
                assert_eq!(env, "OPENAI_API_TOKEN")
            }
            other => panic!("expected missing credential, got {:?}", other),
        }
    }

    /// Tests that a zero TTL disables eviction and the API URL loses its trailing slash.
    ///
    /// Expected: Ok with `notification_ttl` None
    #[test]
    fn zero_ttl_disables_eviction() {
        let config = Config::try_from(Args {
            discord_api_token: Some("discord-token".to_string()),
            openai_api_token: Some("openai-key".to_string()),
            notification_ttl_hours: 0,
            completion_api_url: "http://localhost:8080/v1/".to_string(),
            ..default_args()
        })
        .unwrap();

        assert_eq!(config.notification_ttl, None);
        assert_eq!(config.completion_api_url, "http://localhost:8080/v1");
    }

    /// Tests that an empty notice channel name is rejected.
    ///
    /// Expected: Err(EmptyChannelName)
    #[test]
    fn rejects_empty_channel_name() {
        let result = Config::try_from(Args {
            discord_api_token: Some("discord-token".to_string()),
            openai_api_token: Some("openai-key".to_string()),
            game_channel_name: String::new(),
            ..default_args()
        });

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::EmptyChannelName("game")))
        ));
    }

    /// Tests parsing every flag from the command line.
    ///
    /// Expected: explicit flags are used as given, whatever the environment holds
    #[test]
    fn parses_explicit_flags() {
        let args = Args::try_parse_from([
            "aybot",
            "-t",
            "discord-token",
            "--openai-api-token",
            "openai-key",
            "--completion-api-url",
            "http://localhost:8080/v1",
            "--completion-model",
            "local-model",
            "--voice-channel-name",
            "voice",
            "--game-channel-name",
            "games",
            "--notification-ttl-hours",
            "2",
        ])
        .unwrap();

        let config = Config::try_from(args).unwrap();

        assert_eq!(config.discord_api_token, "discord-token");
        assert_eq!(config.openai_api_token, "openai-key");
        assert_eq!(config.completion_api_url, "http://localhost:8080/v1");
        assert_eq!(config.completion_model, "local-model");
        assert_eq!(config.voice_channel_name, "voice");
        assert_eq!(config.game_channel_name, "games");
        assert_eq!(config.notification_ttl, Some(Duration::from_secs(2 * 3600)));
    }
}
