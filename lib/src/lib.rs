pub mod args;
pub mod bot;
pub mod commands;
pub mod data;
pub mod event_handler;
pub mod functionality;
pub mod handlers;
pub mod prelude;
pub mod util;

use std::path::Path;
use std::sync::Arc;

use crate::args::StateCommand;
use crate::data::BotData;
use crate::functionality::colors::{ColorRoleManager, ManagedRoles};
use crate::util::logger;

pub async fn run(token: &str, config_path: &Path) -> anyhow::Result<()> {
	use serenity::prelude::*;

	use crate::bot::Bot;
	use crate::event_handler::BotEventHandler;

	let config = BotData::load_config(config_path)?;
	let bot = Arc::new(Bot::new(BotData::new(config)));
	bot.load_colors().await;

	// Message content is needed to read commands
	let intents =
		GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

	let mut client = Client::builder(token, intents)
		.event_handler(BotEventHandler::new(bot.clone()))
		.await?;

	let shard_manager = client.shard_manager.clone();

	tokio::spawn(async move {
		if let Err(e) = tokio::signal::ctrl_c().await {
			logger::error_fmt!("Could not register Ctrl+C handler: {}", e);
			return;
		}
		print!("\r");
		logger::debug("Bye!");
		bot.shutdown().await;
		shard_manager.shutdown_all().await;
	});

	client.start().await?;

	Ok(())
}

/// Runs a `state` subcommand against the state file named in the config and
/// returns what to print.
pub fn run_state(config_path: &Path, command: StateCommand) -> anyhow::Result<String> {
	let store = BotData::new(BotData::load_config(config_path)?).state_store();

	let data = store.load()?;
	let roles = if data.is_empty() {
		ManagedRoles::default()
	} else {
		ManagedRoles::from_bytes(&data)?
	};
	let mut colors = ColorRoleManager::with_roles(roles);

	match command {
		StateCommand::Show => Ok(format!(
			"{} ({}): managing {}",
			colors.name(),
			store.path().display(),
			colors.managed().describe()
		)),
		StateCommand::Forget(forget) => {
			let mut lines = Vec::with_capacity(forget.colors.len() + 1);
			let mut changed = false;

			for color in &forget.colors {
				if colors.forget(color) {
					changed = true;
					lines.push(format!("Forgot {}", color.to_lowercase()));
				} else {
					lines.push(format!("Wasn't managing {}", color.to_lowercase()));
				}
			}

			if changed {
				store.save(&colors.save()?)?;
			}

			lines.push(format!("Now managing {}", colors.managed().describe()));

			Ok(lines.join("\n"))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::args::StateForget;
	use std::fs;

	fn setup(state: Option<&str>) -> (tempfile::TempDir, std::path::PathBuf) {
		let dir = tempfile::tempdir().unwrap();
		let state_file = dir.path().join("colors.json");
		let config = dir.path().join("config.toml");

		fs::write(
			&config,
			format!("state_file = {:?}", state_file.display().to_string()),
		)
		.unwrap();

		if let Some(state) = state {
			fs::write(&state_file, state).unwrap();
		}

		(dir, config)
	}

	#[test]
	fn show_without_state() {
		let (_dir, config) = setup(None);

		let out = run_state(&config, StateCommand::Show).unwrap();
		assert!(out.ends_with("managing nothing"), "{}", out);
	}

	#[test]
	fn show_lists_colors() {
		let (_dir, config) = setup(Some(r#"{"managedRoles":{"red":true,"blue":true}}"#));

		let out = run_state(&config, StateCommand::Show).unwrap();
		assert!(out.ends_with("managing blue, red"), "{}", out);
	}

	#[test]
	fn show_refuses_broken_state() {
		let (_dir, config) = setup(Some("nope"));

		assert!(run_state(&config, StateCommand::Show).is_err());
	}

	#[test]
	fn forget_writes_state_back() {
		let (dir, config) = setup(Some(r#"{"managedRoles":{"red":true,"blue":true}}"#));

		let out = run_state(
			&config,
			StateCommand::Forget(StateForget {
				colors: vec!["Red".to_string(), "purple".to_string()],
			}),
		)
		.unwrap();

		assert_eq!(
			out,
			"Forgot red\nWasn't managing purple\nNow managing blue"
		);

		let saved = fs::read(dir.path().join("colors.json")).unwrap();
		let roles = ManagedRoles::from_bytes(&saved).unwrap();
		assert_eq!(roles.names(), vec!["blue"]);
	}
}
