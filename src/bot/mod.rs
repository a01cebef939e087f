//! Telegram binding.
//!
//! Routes every text message through the conversation state machine, keeps
//! one dialogue per chat in memory and executes the resulting effects.

mod handler;

use std::sync::Arc;

use log::info;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;

use crate::conversation::State;
use crate::pipeline::PipelineContext;

/// Runs the long-polling loop until Ctrl-C.
pub async fn run_bot(bot: Bot, ctx: Arc<PipelineContext>) {
    info!("Bot started, waiting for messages");

    let handler = Update::filter_message()
        .enter_dialogue::<Message, InMemStorage<State>, State>()
        .endpoint(handler::handle_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<State>::new(), ctx])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Bot stopped");
}
