use std::path::{Path, PathBuf};

use serde::Deserialize;
use serenity::model::prelude::{ChannelId, GuildId};

pub const RESOURCE_PATH: &str = "res";
pub const CONFIG_FILE: &str = "config.toml";

pub const SAVED_DIR: &str = "saved";
pub const COLORS_FILE: &str = "colors.json";

pub const DEFAULT_PREFIX: &str = "!";

pub fn default_config_path() -> PathBuf {
	Path::new(RESOURCE_PATH).join(CONFIG_FILE)
}

fn default_prefix() -> String {
	DEFAULT_PREFIX.to_string()
}

fn default_state_file() -> PathBuf {
	Path::new(SAVED_DIR).join(COLORS_FILE)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// What every command starts with.
	#[serde(default = "default_prefix")]
	pub prefix: String,

	/// Who may manage colors. Falls back to the application owner.
	#[serde(default)]
	pub owner: Option<u64>,

	#[serde(default = "default_state_file")]
	pub state_file: PathBuf,

	/// Channels commands are listened to in. Empty means everywhere.
	#[serde(default)]
	pub allowed_channels: Vec<u64>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			prefix: default_prefix(),
			owner: None,
			state_file: default_state_file(),
			allowed_channels: vec![],
		}
	}
}

impl Config {
	pub fn from_toml(data: &str) -> anyhow::Result<Config> {
		let config: Config = toml::from_str(data)?;

		if config.prefix.trim().is_empty() {
			anyhow::bail!("Command prefix cannot be empty");
		}

		if config.owner == Some(0) {
			anyhow::bail!("Owner id cannot be 0");
		}

		Ok(config)
	}

	/// Commands are only taken from guild channels, and only from
	/// `allowed_channels` when any are listed.
	pub fn listens_to(&self, guild: Option<GuildId>, channel: ChannelId) -> bool {
		guild.is_some()
			&& (self.allowed_channels.is_empty() || self.allowed_channels.contains(&channel.get()))
	}
}
