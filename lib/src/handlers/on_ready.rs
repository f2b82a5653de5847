use crate::prelude::*;

use crate::bot::Bot;

use serenity::model::prelude::*;
use serenity::prelude::*;

impl Bot {
	pub async fn on_ready(&self, ctx: &Context, ready: &Ready) -> HueResult {
		logger::debug("Getting ready...");

		if self.data().await.owner.is_none() {
			let info = ctx.http.get_current_application_info().await?;
			let owner = info.owner.map(|user| user.id);

			match owner {
				Some(owner) => logger::info_fmt!("No owner configured, using application owner {}", owner),
				None => logger::warning("No owner configured or found, nobody can manage colors"),
			}

			self.data.write().await.owner = owner;
		}

		let colors = self.colors().await;

		logger::info_fmt!(
			"Am ready :). I am {}. {} is managing {} colors",
			ready.user.tag(),
			colors.name(),
			colors.managed().len()
		);

		for line in colors.stats() {
			logger::info(&line);
		}

		Ok(())
	}
}
