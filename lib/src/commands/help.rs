use crate::prelude::*;

use crate::bot::Bot;
use crate::functionality::colors::ColorRoleManager;
use serenity::model::prelude::*;
use serenity::prelude::*;

use super::commander::{Arguments, Command};
use async_trait::async_trait;

use huebot_macros::command;

#[command]
async fn help<'a>(
	&self,
	ctx: &Context,
	msg: &'a Message,
	_words: Arguments<'a>,
	bot: &Bot,
) -> HueResult {
	let prefix = bot.data.read().await.config.prefix.clone();

	msg.say_report(ctx, ColorRoleManager::help(&prefix).join("\n"))
		.await;

	Ok(())
}
