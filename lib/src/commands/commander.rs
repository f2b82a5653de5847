use crate::prelude::*;

use crate::bot::Bot;
use std::collections::HashMap;

use serenity::model::prelude::*;
use serenity::prelude::*;

use async_trait::async_trait;

use std::collections::VecDeque;

#[async_trait]
pub trait Command: Send + Sync {
	/// Lowercase phrase the command is invoked with, e.g. `color me`.
	fn name() -> &'static str
	where
		Self: Sized;

	fn aliases() -> &'static [&'static str]
	where
		Self: Sized,
	{
		&[]
	}

	async fn execute<'a>(
		&self,
		ctx: &Context,
		msg: &'a Message,
		args: Arguments<'a>,
		bot: &Bot,
	) -> HueResult;
}

pub struct Commander {
	commands: HashMap<String, &'static dyn Command>,
	longest_phrase: usize,
}

impl Default for Commander {
	fn default() -> Self {
		Commander::new()
	}
}

impl Commander {
	pub fn new() -> Commander {
		Commander {
			commands: HashMap::new(),
			longest_phrase: 0,
		}
	}

	pub fn register_all(&mut self) {
		self.register_command(&super::color::ColorMe);
		self.register_command(&super::color::ManageColor);
		self.register_command(&super::color::StopManaging);
		self.register_command(&super::help::Help);
	}

	pub fn register_command<T: Command + 'static>(&mut self, command: &'static T) {
		self.insert(T::name(), command);
		for alias in T::aliases().iter() {
			self.insert(alias, command);
		}
	}

	fn insert(&mut self, phrase: &str, command: &'static dyn Command) {
		let words = phrase.split_whitespace().collect::<Vec<_>>();
		self.longest_phrase = self.longest_phrase.max(words.len());
		self.commands
			.insert(words.join(" ").to_lowercase(), command);
	}

	/// Finds the command `content` invokes. The longest matching phrase wins,
	/// whatever follows it is left as arguments.
	pub fn resolve<'a>(
		&self,
		content: &'a str,
		prefix: &str,
	) -> Option<(&str, &'static dyn Command, Arguments<'a>)> {
		let mut words = Arguments::from(content.strip_prefix(prefix)?);

		for length in (1..=self.longest_phrase.min(words.count())).rev() {
			let phrase = words.peek(length).join(" ").to_lowercase();

			if let Some((phrase, command)) = self.commands.get_key_value(&phrase) {
				words.skip(length);
				return Some((phrase.as_str(), *command, words));
			}
		}

		None
	}

	pub async fn parse(&self, ctx: &Context, msg: &Message, bot: &Bot, prefix: &str) -> HueResult {
		let Some((phrase, command, words)) = self.resolve(&msg.content, prefix) else {
			return Err(huerror::debug!(
				log fmt = ("No such command: {}", msg.content)
			));
		};

		logger::debug_fmt!("Running {} for {}", phrase, msg.author.name);

		command.execute(ctx, msg, words, bot).await
	}
}

#[derive(Debug)]
pub struct Arguments<'a> {
	args: VecDeque<&'a str>,
}

impl<'a, 'b: 'a> From<&'b str> for Arguments<'a> {
	fn from(value: &'b str) -> Arguments<'a> {
		Arguments {
			args: value.split_whitespace().collect::<VecDeque<_>>(),
		}
	}
}

impl<'a> Arguments<'a> {
	pub fn count(&self) -> usize {
		self.args.len()
	}

	fn peek(&self, amount: usize) -> Vec<&'a str> {
		self.args.iter().take(amount).copied().collect()
	}

	fn skip(&mut self, amount: usize) {
		self.args.drain(..amount.min(self.args.len()));
	}

	pub fn all(self) -> Vec<&'a str> {
		self.args.into_iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn commander() -> Commander {
		let mut commander = Commander::new();
		commander.register_all();
		commander
	}

	fn resolve<'a>(commander: &Commander, content: &'a str) -> Option<(String, Vec<&'a str>)> {
		commander
			.resolve(content, "!")
			.map(|(phrase, _, args)| (phrase.to_string(), args.all()))
	}

	#[test]
	fn registers_phrases_and_aliases() {
		let commander = commander();

		for phrase in [
			"color me",
			"colour me",
			"help",
			"manage color",
			"manage colour",
			"stop managing",
		] {
			let content = format!("!{} red", phrase);
			assert_eq!(
				resolve(&commander, &content),
				Some((phrase.to_string(), vec!["red"]))
			);
		}

		assert_eq!(commander.commands.len(), 6);
	}

	#[test]
	fn multi_word_commands_take_remaining_words() {
		let commander = commander();

		assert_eq!(
			resolve(&commander, "!color me Red"),
			Some(("color me".to_string(), vec!["Red"]))
		);
		assert_eq!(
			resolve(&commander, "!manage color  Red   Blue"),
			Some(("manage color".to_string(), vec!["Red", "Blue"]))
		);
		assert_eq!(
			resolve(&commander, "!stop managing red"),
			Some(("stop managing".to_string(), vec!["red"]))
		);
		assert_eq!(
			resolve(&commander, "!colour me"),
			Some(("colour me".to_string(), vec![]))
		);
	}

	#[test]
	fn phrases_are_case_insensitive() {
		assert_eq!(
			resolve(&commander(), "!Color ME blue"),
			Some(("color me".to_string(), vec!["blue"]))
		);
	}

	#[test]
	fn non_commands_are_ignored() {
		let commander = commander();

		assert!(resolve(&commander, "color me red").is_none());
		assert!(resolve(&commander, "!color").is_none());
		assert!(resolve(&commander, "!colorme red").is_none());
		assert!(resolve(&commander, "!").is_none());
		assert!(resolve(&commander, "").is_none());
	}

	#[test]
	fn custom_prefixes() {
		let commander = commander();

		let (phrase, _, args) = commander.resolve("hue help me", "hue ").unwrap();
		assert_eq!(phrase, "help");
		assert_eq!(args.all(), vec!["me"]);
	}

	#[test]
	fn arguments_split_on_whitespace() {
		let mut args = Arguments::from("  a b\tc\n");

		assert_eq!(args.count(), 3);
		args.skip(1);
		assert_eq!(args.all(), vec!["b", "c"]);
		assert_eq!(Arguments::from("   ").count(), 0);
	}
}
