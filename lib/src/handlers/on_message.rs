use crate::prelude::*;

use crate::bot::Bot;

use colored::Colorize;
use serenity::model::prelude::*;
use serenity::prelude::*;

impl Bot {
	pub async fn on_message(&self, ctx: &Context, msg: &Message) -> HueResult {
		if msg.author.bot || msg.is_own(ctx) {
			return Ok(());
		}

		let prefix = {
			let bot_data = self.data().await;

			if !bot_data.config.listens_to(msg.guild_id, msg.channel_id) {
				return Ok(());
			}

			bot_data.config.prefix.clone()
		};

		if !msg.content.starts_with(&prefix) {
			return Ok(());
		}

		log(ctx, msg).await;

		self.commander.parse(ctx, msg, self, &prefix).await
	}
}

async fn log(ctx: &Context, msg: &Message) {
	let channel = msg
		.channel_id
		.name(ctx)
		.await
		.unwrap_or_else(|_| "unknown-channel".to_string());

	logger::info_fmt!(
		"{} @ {}: {}",
		msg.author.name.cyan(),
		channel.cyan(),
		msg.content_safe(ctx)
	);
}
