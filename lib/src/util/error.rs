use super::logger;
use crate::functionality::colors::ColorError;
use serenity::{model::prelude::Message, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
	Debug,
	Warning,
	Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMsgType {
	None,
	Normal(String),
}

pub type HueResult<T = ()> = std::result::Result<T, HueError>;

/// An error that knows what to write to the log and what, if anything, to
/// tell the user that triggered it.
pub struct HueError(HueErrorImpl);

impl HueError {
	pub fn as_debug<A>(to_log: Option<A>, to_user: UserMsgType) -> Self
	where
		A: Into<String>,
	{
		HueError(HueErrorImpl::new(
			LogType::Debug,
			to_log.map(A::into),
			to_user,
			None,
		))
	}

	pub fn as_error<A>(to_log: Option<A>, to_user: UserMsgType) -> Self
	where
		A: Into<String>,
	{
		HueError(HueErrorImpl::new(
			LogType::Error,
			to_log.map(A::into),
			to_user,
			None,
		))
	}

	pub fn log_type(&self) -> LogType {
		self.0.log_type
	}

	pub fn user_message(&self) -> Option<&str> {
		match self.0.to_user {
			UserMsgType::Normal(ref s) if !s.is_empty() => Some(s),
			_ => None,
		}
	}

	pub fn log(self) {
		self.0.log();
	}

	pub async fn send(self, ctx: &Context, to: &Message) -> Self {
		self.0.send(ctx, to).await;

		self
	}

	pub async fn report(self, ctx: &Context, to: &Message) {
		self.send(ctx, to).await.log()
	}

	pub fn with_source(mut self, error: impl Into<anyhow::Error>) -> Self {
		self.0.source = Some(error.into());

		self
	}
}

impl std::fmt::Display for HueError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(&self.0, f)
	}
}

impl std::fmt::Debug for HueError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Debug::fmt(&self.0, f)
	}
}

macro_rules! into_hue {
	($($ty:ty [$user:expr]),*$(,)?) => {
    $(
      impl From<$ty> for HueError {
        fn from(value: $ty) -> Self {
          HueError(HueErrorImpl {
            log_type: LogType::Error,
            to_log: None,
            to_user: $user,
            source: Some(anyhow::Error::from(value)),
          })
        }
      }
    )*
	};
}

into_hue!(
	SerenityError[UserMsgType::Normal(
		"Discord is being a little difficult right now".into()
	)],
	std::io::Error[UserMsgType::None],
	toml::de::Error[UserMsgType::None],
	serde_json::Error[UserMsgType::None],
	ColorError[UserMsgType::None],
);

#[derive(thiserror::Error, Debug)]
struct HueErrorImpl {
	log_type: LogType,
	to_log: Option<String>,
	to_user: UserMsgType,
	#[source]
	source: Option<anyhow::Error>,
}

impl HueErrorImpl {
	pub fn new(
		log_type: LogType,
		to_log: Option<String>,
		to_user: UserMsgType,
		source: Option<anyhow::Error>,
	) -> Self {
		HueErrorImpl {
			log_type,
			to_log,
			to_user,
			source,
		}
	}

	async fn send(&self, ctx: &Context, to: &Message) -> &Self {
		let to_send = match self.to_user {
			UserMsgType::Normal(ref to_user) if !to_user.is_empty() => to_user,
			_ => return self,
		};

		if let Err(e) = to.channel_id.say(&ctx.http, to_send).await {
			logger::error_fmt!("Could not send error message to {}: {}", to.channel_id, e);
		}

		self
	}

	fn log(self) {
		match (self.to_log.is_some(), self.source) {
			(true, Some(ref source)) => match self.log_type {
				LogType::Debug => logger::debug_fmt!("{}: {}", Self::message(&self.to_log), source),
				LogType::Warning => {
					logger::warning_fmt!("{}: {:?}", Self::message(&self.to_log), source)
				}
				LogType::Error => logger::error_fmt!("{}: {:?}", Self::message(&self.to_log), source),
			},
			(true, None) => match self.log_type {
				LogType::Debug => logger::debug_fmt!("{}", Self::message(&self.to_log)),
				LogType::Warning => logger::warning_fmt!("{}", Self::message(&self.to_log)),
				LogType::Error => logger::error_fmt!("{}", Self::message(&self.to_log)),
			},
			(false, Some(source)) => match self.log_type {
				LogType::Debug => logger::debug_fmt!("{}", source),
				LogType::Warning => logger::warning_fmt!("{:?}", source),
				LogType::Error => logger::error_fmt!("{:?}", source),
			},
			(false, None) => {
				// Nothing to log...
			}
		}
	}

	fn message(to_log: &Option<String>) -> &str {
		to_log.as_deref().unwrap_or_default()
	}
}

impl std::fmt::Display for HueErrorImpl {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if let Some(err_msg) = self.to_log.as_ref() {
			write!(f, "{}", err_msg)?;
		}

		Ok(())
	}
}

macro_rules! fmt_or_str_or_none {
	() => {
		Option::<String>::None
	};
	(() or ) => {
		Option::<String>::None
	};
	(() or $entity:expr) => {
		Some($entity)
	};
	(($entity:tt) or ) => {
		Some(format!$entity)
	};
	(($__:tt) or $_:expr) => {
		compile_error!("Invalid combination for fmt_or_str_or_none")
	};
}

macro_rules! user_fmt_or_str_or_none {
	() => {
		$crate::util::error::UserMsgType::None
	};
	(() or ) => {
		$crate::util::error::UserMsgType::None
	};
	(() or $entity:expr) => {
		$crate::util::error::UserMsgType::Normal($entity.into())
	};
	(($entity:tt) or ) => {
		$crate::util::error::UserMsgType::Normal(format!$entity)
	};
	(($__:tt) or $_:expr) => {
		compile_error!("Invalid combination for fmt_or_str_or_none")
	};
}

macro_rules! create_error {
	($iden:ident,) => {
		$crate::util::error::HueError::$iden(
			Option::<String>::None,
			$crate::util::error::UserMsgType::None,
		)
	};
  ($iden:ident, user $(fmt = $userfmt:tt)?$(= $user:expr)?) => {
    $crate::util::error::HueError::$iden(
			Option::<String>::None,
			$crate::util::error::user_fmt_or_str_or_none!(($($userfmt)?) or $($user)?)
		)
  };
  ($iden:ident, log $(fmt = $logfmt:tt)?$( = $log:expr)? $(, user $(fmt = $userfmt:tt)?$(= $user:expr)?)?) => {
		$crate::util::error::HueError::$iden(
			$crate::util::error::fmt_or_str_or_none!(($($logfmt)?) or $($log)?),
			$crate::util::error::user_fmt_or_str_or_none!($(($($userfmt)?) or $($user)?)?)
		)
	};
}

#[macro_export]
macro_rules! error_map {
  ($($tt:tt)*) => {
    |e| $crate::util::error::create_error!(as_error, $($tt)*).with_source(e)
  };
}

#[macro_export]
macro_rules! debug {
  ($($tt:tt)*) => {
    $crate::util::error::create_error!(as_debug, $($tt)*)
  };
}

#[macro_export]
macro_rules! debug_lazy {
  ($($tt:tt)*) => {
    || $crate::util::error::create_error!(as_debug, $($tt)*)
  };
}

pub(crate) use create_error;
pub(crate) use debug;
pub(crate) use debug_lazy;
pub(crate) use error_map;
pub(crate) use fmt_or_str_or_none;
pub(crate) use user_fmt_or_str_or_none;
