pub mod config;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serenity::model::prelude::UserId;

pub use config::Config;

use crate::util::logger;

pub struct BotData {
	pub config: Config,
	/// Resolved once the bot is ready, if the config doesn't name one.
	pub owner: Option<UserId>,
}

impl BotData {
	pub fn new(config: Config) -> BotData {
		BotData {
			owner: config.owner.map(UserId::new),
			config,
		}
	}

	/// Reads the config at `path`. A missing file means the defaults.
	pub fn load_config(path: &Path) -> anyhow::Result<Config> {
		match fs::read_to_string(path) {
			Ok(data) => Config::from_toml(&data),
			Err(e) if e.kind() == ErrorKind::NotFound => {
				logger::warning_fmt!("No config at {}, using defaults", path.display());
				Ok(Config::default())
			}
			Err(e) => Err(e.into()),
		}
	}

	pub fn state_store(&self) -> StateStore {
		StateStore::new(self.config.state_file.clone())
	}
}

/// Where plugin state lives between runs.
#[derive(Debug, Clone)]
pub struct StateStore {
	path: PathBuf,
}

impl StateStore {
	pub fn new(path: impl Into<PathBuf>) -> StateStore {
		StateStore { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Nothing saved yet reads as no bytes.
	pub fn load(&self) -> anyhow::Result<Vec<u8>> {
		match fs::read(&self.path) {
			Ok(data) => Ok(data),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
			Err(e) => Err(e.into()),
		}
	}

	pub fn save(&self, data: &[u8]) -> anyhow::Result<()> {
		if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent)?;
		}

		let mut tmp = self.path.clone().into_os_string();
		tmp.push(".tmp");

		fs::write(&tmp, data)?;
		fs::rename(&tmp, &self.path)?;

		Ok(())
	}
}
