mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use serenity::http::Http;

use crate::{
    config::Config,
    data::channel_directory::ChannelLabels,
    error::AppError,
    service::notification::title::TitlePicker,
    state::{BotState, StateStore},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_args()?;

    let http_client = startup::setup_reqwest_client()?;
    let completion = Arc::new(startup::setup_completion_client(&config, http_client));
    startup::probe_completion(completion.as_ref(), &config.completion_model).await;

    let discord = Arc::new(Http::new(&config.discord_api_token));
    let store = StateStore::new(
        ChannelLabels {
            voice: config.voice_channel_name.clone(),
            game: config.game_channel_name.clone(),
        },
        config.notification_ttl,
        TitlePicker::from_os_rng(),
    );
    let state = BotState::new(discord, completion, config.completion_model.clone(), store);

    tracing::info!(
        "Posting voice notices to #{} and game notices to #{}",
        config.voice_channel_name,
        config.game_channel_name
    );

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await?;

    tracing::info!("Discord bot stopped");

    Ok(())
}
