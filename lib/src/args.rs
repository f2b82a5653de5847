use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::data::config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct HuebotArgs {
	/// Config file to use instead of res/config.toml
	#[arg(long, short, global = true)]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Option<Commands>,
}

impl HuebotArgs {
	pub fn config_path(&self) -> PathBuf {
		self.config
			.clone()
			.unwrap_or_else(config::default_config_path)
	}
}

#[derive(Subcommand)]
pub enum Commands {
	/// Connect to Discord and start listening for commands
	///
	/// This is what happens when no command is given. Needs DISCORD_TOKEN.
	Run,

	/// Inspect or edit saved color state
	///
	/// Works on the state file directly, the bot does not need to be running.
	State(StateArgs),
}

#[derive(Args)]
pub struct StateArgs {
	#[command(subcommand)]
	pub command: StateCommand,
}

#[derive(Subcommand)]
pub enum StateCommand {
	/// List the colors being managed
	Show,

	/// Stop managing colors
	Forget(StateForget),
}

#[derive(Args)]
pub struct StateForget {
	/// Names of the colors to forget
	#[arg(required = true)]
	pub colors: Vec<String>,
}
