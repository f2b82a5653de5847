use super::logger;
use async_trait::async_trait;

use serenity::model::prelude::*;
use serenity::prelude::*;

pub trait ResultExt<T> {
	fn log_if_err(self, msg: &str);
	fn ok_or_log(self, msg: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
	fn log_if_err(self, msg: &str) {
		match self {
			Ok(_) => (),
			Err(e) => {
				logger::error_fmt!("{}: {}", msg, e);
			}
		}
	}

	fn ok_or_log(self, msg: &str) -> Option<T> {
		match self {
			Ok(t) => Some(t),
			Err(e) => {
				logger::error_fmt!("{}: {}", msg, e);
				None
			}
		}
	}
}

#[async_trait]
pub trait MessageExt {
	/// Sends `content` to the channel the message came from, logging failures.
	async fn say_report(&self, ctx: &Context, content: impl std::fmt::Display + Send);
}

#[async_trait]
impl MessageExt for Message {
	async fn say_report(&self, ctx: &Context, content: impl std::fmt::Display + Send) {
		self.channel_id
			.say(&ctx.http, content.to_string())
			.await
			.log_if_err(&format!("Could not reply to message {}", self.id));
	}
}
