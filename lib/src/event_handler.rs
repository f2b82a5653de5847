use crate::bot::Bot;
use crate::util::logger;

use serenity::async_trait;
use serenity::model::prelude::*;
use serenity::prelude::*;

use std::sync::Arc;

pub struct BotEventHandler {
	bot: Arc<Bot>,
}

impl BotEventHandler {
	pub fn new(bot: Arc<Bot>) -> BotEventHandler {
		BotEventHandler { bot }
	}
}

#[async_trait]
impl EventHandler for BotEventHandler {
	async fn ready(&self, ctx: Context, ready: Ready) {
		if let Err(e) = self.bot.on_ready(&ctx, &ready).await {
			e.log();
		}
	}

	async fn resume(&self, _ctx: Context, _: ResumedEvent) {
		logger::debug("Reconnected :)");
	}

	async fn message(&self, ctx: Context, msg: Message) {
		if let Err(e) = self.bot.on_message(&ctx, &msg).await {
			e.report(&ctx, &msg).await;
		}
	}
}
