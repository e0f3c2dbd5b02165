use serenity::all::Message;

use crate::{
    model::message::InboundMessage, service::completion::relay::CompletionRelay,
    state::BotState,
};

/// Handle message creation in a channel
pub async fn handle_message(state: &BotState, message: Message) {
    let inbound = InboundMessage::from(&message);
    let me = state.current_user().await;

    CompletionRelay::new(
        state.discord.as_ref(),
        state.completion.as_ref(),
        &state.completion_model,
    )
    .handle_message(&inbound, me.as_ref())
    .await;
}
