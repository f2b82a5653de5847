use crate::prelude::*;

use crate::bot::Bot;
use crate::functionality::colors::DiscordGuild;
use serenity::model::prelude::*;
use serenity::prelude::*;

use super::commander::{Arguments, Command};
use async_trait::async_trait;

use huebot_macros::command;

fn guild<'a>(ctx: &'a Context, msg: &'a Message) -> HueResult<DiscordGuild<'a>> {
	let guild_id = msg.guild_id.ok_or_else(huerror::debug_lazy!(
		log = "Color command used outside of guild",
		user = "You need to be in a server, silly!"
	))?;

	Ok(DiscordGuild::new(ctx, msg, guild_id))
}

#[command(aliases = ["colour me"])]
async fn color_me<'a>(
	&self,
	ctx: &Context,
	msg: &'a Message,
	words: Arguments<'a>,
	bot: &Bot,
) -> HueResult {
	let guild = guild(ctx, msg)?;
	let colors = words.all();

	let manager = bot.colors.read().await;
	if let Err(e) = manager
		.assign_color(&guild, msg.author.id, &colors)
		.await
	{
		e.report(&guild, msg.author.id).await;
	}

	Ok(())
}

#[command(aliases = ["manage colour"])]
async fn manage_color<'a>(
	&self,
	ctx: &Context,
	msg: &'a Message,
	words: Arguments<'a>,
	bot: &Bot,
) -> HueResult {
	let guild = guild(ctx, msg)?;
	let colors = words.all();
	let owner = bot.data.read().await.owner;

	let mut manager = bot.colors.write().await;
	match manager
		.manage_colors(&guild, msg.author.id, owner, &colors)
		.await
	{
		Ok(true) => bot.save_colors(&manager).await,
		Ok(false) => Ok(()),
		Err(e) => {
			e.report(&guild, msg.author.id).await;
			Ok(())
		}
	}
}

#[command]
async fn stop_managing<'a>(
	&self,
	ctx: &Context,
	msg: &'a Message,
	words: Arguments<'a>,
	bot: &Bot,
) -> HueResult {
	let guild = guild(ctx, msg)?;
	let colors = words.all();
	let owner = bot.data.read().await.owner;

	let mut manager = bot.colors.write().await;
	match manager
		.stop_managing(&guild, msg.author.id, owner, &colors)
		.await
	{
		Ok(true) => bot.save_colors(&manager).await,
		Ok(false) => Ok(()),
		Err(e) => {
			e.report(&guild, msg.author.id).await;
			Ok(())
		}
	}
}
