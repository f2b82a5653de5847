use std::sync::atomic::{AtomicBool, Ordering};

use serenity::prelude::*;

use super::commands::commander::Commander;
use super::data::BotData;
use crate::functionality::colors::ColorRoleManager;
use crate::prelude::*;

pub struct Bot {
	pub(crate) data: RwLock<BotData>,
	pub(crate) colors: RwLock<ColorRoleManager>,
	pub(crate) commander: Commander,
	/// Set while the managed colors differ from what the state file holds.
	unsaved: AtomicBool,
}

impl Bot {
	pub fn new(data: BotData) -> Bot {
		let mut commander = Commander::new();
		commander.register_all();

		Bot {
			data: RwLock::new(data),
			colors: RwLock::new(ColorRoleManager::new()),
			commander,
			unsaved: AtomicBool::new(false),
		}
	}

	pub async fn data(&self) -> tokio::sync::RwLockReadGuard<'_, BotData> {
		self.data.read().await
	}

	pub async fn colors(&self) -> tokio::sync::RwLockReadGuard<'_, ColorRoleManager> {
		self.colors.read().await
	}

	/// Restores managed colors from the state file. Problems are logged.
	pub async fn load_colors(&self) {
		let store = self.data.read().await.state_store();

		let Some(bytes) = store
			.load()
			.ok_or_log(&format!("Could not read {}", store.path().display()))
		else {
			return;
		};

		let mut colors = self.colors.write().await;
		colors.load(&bytes);

		logger::info_fmt!(
			"Loaded {} managed colors from {}",
			colors.managed().len(),
			store.path().display()
		);
	}

	/// Writes `colors` to the state file. Takes the manager rather than
	/// locking it so callers can save while holding the write guard.
	pub async fn save_colors(&self, colors: &ColorRoleManager) -> HueResult {
		self.unsaved.store(true, Ordering::SeqCst);

		let store = self.data.read().await.state_store();
		let bytes = colors.save()?;

		store.save(&bytes).map_err(huerror::error_map!(
			log fmt = ("Could not save colors to {}", store.path().display()),
			user = "I couldn't write that down, it might be forgotten on restart"
		))?;

		self.unsaved.store(false, Ordering::SeqCst);
		logger::debug_fmt!("Saved colors to {}", store.path().display());

		Ok(())
	}

	/// Retries a save that failed earlier. The state file is left alone
	/// otherwise, so one that couldn't be loaded isn't replaced.
	pub async fn shutdown(&self) {
		if !self.unsaved.load(Ordering::SeqCst) {
			return;
		}

		let colors = self.colors.read().await;
		if let Err(e) = self.save_colors(&colors).await {
			e.log();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Config;
	use crate::functionality::colors::ManagedRoles;
	use std::fs;
	use std::path::Path;

	fn bot_with_state(state_file: &Path) -> Bot {
		Bot::new(BotData::new(Config {
			state_file: state_file.to_path_buf(),
			..Config::default()
		}))
	}

	fn managing(names: &[&str]) -> ColorRoleManager {
		let mut roles = ManagedRoles::default();
		for name in names {
			roles.manage(name);
		}
		ColorRoleManager::with_roles(roles)
	}

	#[tokio::test]
	async fn saved_colors_survive_a_restart() {
		let dir = tempfile::tempdir().unwrap();
		let state_file = dir.path().join("saved").join("colors.json");

		let bot = bot_with_state(&state_file);
		bot.save_colors(&managing(&["Red", "blue"])).await.unwrap();
		assert!(state_file.exists());

		let restarted = bot_with_state(&state_file);
		restarted.load_colors().await;

		assert_eq!(restarted.colors().await.managed().names(), vec!["blue", "red"]);
	}

	#[tokio::test]
	async fn missing_state_loads_nothing() {
		let dir = tempfile::tempdir().unwrap();
		let bot = bot_with_state(&dir.path().join("colors.json"));

		bot.load_colors().await;

		assert!(bot.colors().await.managed().is_empty());
	}

	#[tokio::test]
	async fn shutdown_keeps_unreadable_state() {
		let dir = tempfile::tempdir().unwrap();
		let state_file = dir.path().join("colors.json");
		fs::write(&state_file, "{ not json").unwrap();

		let bot = bot_with_state(&state_file);
		bot.load_colors().await;
		assert!(bot.colors().await.managed().is_empty());

		bot.shutdown().await;

		assert_eq!(fs::read_to_string(&state_file).unwrap(), "{ not json");
	}

	#[tokio::test]
	async fn shutdown_retries_failed_saves() {
		let dir = tempfile::tempdir().unwrap();
		// A file in place of the parent directory makes the first save fail
		let blocker = dir.path().join("saved");
		fs::write(&blocker, "").unwrap();
		let state_file = blocker.join("colors.json");

		let bot = bot_with_state(&state_file);
		*bot.colors.write().await = managing(&["red"]);

		let colors = bot.colors().await;
		assert!(bot.save_colors(&colors).await.is_err());
		drop(colors);

		fs::remove_file(&blocker).unwrap();
		bot.shutdown().await;

		let saved = ManagedRoles::from_bytes(&fs::read(&state_file).unwrap()).unwrap();
		assert_eq!(saved.names(), vec!["red"]);
	}
}
