use serenity::model::mention::Mentionable;
use serenity::model::prelude::*;

use super::guild::Replier;
use crate::util::error::LogType;
use crate::util::logger;

pub type ColorResult<T = ()> = std::result::Result<T, ColorError>;

#[derive(thiserror::Error, Debug)]
pub enum ColorError {
	#[error("No color given")]
	MissingColor,
	#[error("More than one color given")]
	TooManyColors,
	#[error("No role called {0}")]
	RoleNotFound(String),
	#[error("{0} is not managed")]
	NotManaged(String),
	#[error("{0} is already managed")]
	AlreadyManaged(String),
	#[error("Management command used by someone other than the owner")]
	NotOwner,
	#[error("{0} carries moderation permissions")]
	PrivilegedRole(String),
	#[error("Could not fetch member roles")]
	MemberLookup(#[source] anyhow::Error),
	#[error("Could not remove role {role}")]
	RemoveFailed {
		role: String,
		#[source]
		source: anyhow::Error,
	},
	#[error("Could not add role {role}")]
	AddFailed {
		role: String,
		#[source]
		source: anyhow::Error,
	},
	#[error("Malformed color data")]
	Deserialize(#[source] serde_json::Error),
	#[error("Could not serialize color data")]
	Serialize(#[source] serde_json::Error),
}

impl ColorError {
	pub fn log_type(&self) -> LogType {
		match self {
			Self::MemberLookup(..) | Self::RemoveFailed { .. } | Self::AddFailed { .. } => {
				LogType::Warning
			}
			Self::Deserialize(..) | Self::Serialize(..) => LogType::Error,
			_ => LogType::Debug,
		}
	}

	pub fn to_user(&self, requester: UserId) -> String {
		let requester = requester.mention();

		match self {
			Self::MissingColor => format!("Uh, {}, I think you forgot to name a color.", requester),
			Self::TooManyColors => format!("Uh, {}, I can't give you more than one color.", requester),
			Self::RoleNotFound(color) => {
				format!("Uh, {}, I can't find a role called {}", requester, color)
			}
			Self::NotManaged(color) => format!("Uh, {}, I'm not managing {}", requester, color),
			Self::AlreadyManaged(color) => {
				format!("Uh, {}, I am already managing {}", requester, color)
			}
			Self::NotOwner => format!(
				"Uh, {}, I think you need to ask my owner for that command.",
				requester
			),
			Self::PrivilegedRole(color) => format!(
				"Uh, {}, I think {} is more than just a colored role.",
				requester, color
			),
			Self::MemberLookup(..) => format!(
				"Uh, {}, I couldn't figure out which roles you have.",
				requester
			),
			Self::RemoveFailed { role, .. } => format!(
				"Uh, {}, something went wrong. Are you sure I can manage {}?",
				requester, role
			),
			Self::AddFailed { role, .. } => format!(
				"Uh, {}, something went wrong. Are you sure I can let you be {}?",
				requester, role
			),
			Self::Deserialize(..) | Self::Serialize(..) => {
				format!("Uh, {}, I lost my notes on colors.", requester)
			}
		}
	}

	pub fn log(&self) {
		let text = match std::error::Error::source(self) {
			Some(source) => format!("{}: {}", self, source),
			None => self.to_string(),
		};

		match self.log_type() {
			LogType::Debug => logger::debug(&text),
			LogType::Warning => logger::warning(&text),
			LogType::Error => logger::error(&text),
		}
	}

	/// Tells `requester` what went wrong and logs it.
	pub async fn report<R>(&self, replier: &R, requester: UserId)
	where
		R: Replier + ?Sized,
	{
		replier.reply(&self.to_user(requester)).await;
		self.log();
	}
}
