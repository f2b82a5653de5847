use std::env;
use std::process::ExitCode;

use clap::Parser;
use huebot::args::{Commands, HuebotArgs};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
	// A .env file is optional, the environment may already be set up
	let _ = dotenvy::dotenv();

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let args = HuebotArgs::parse();
	let config_path = args.config_path();

	let result = match args.command {
		None | Some(Commands::Run) => {
			let Ok(token) = env::var("DISCORD_TOKEN") else {
				eprintln!("Expected a token in the environment (DISCORD_TOKEN)");
				return ExitCode::FAILURE;
			};

			huebot::run(&token, &config_path).await
		}
		Some(Commands::State(state)) => {
			huebot::run_state(&config_path, state.command).map(|out| println!("{}", out))
		}
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{:?}", e);
			ExitCode::FAILURE
		}
	}
}
