//! Self-assignable color roles.
//!
//! Members pick a color role by name with `color me`; the bot owner decides
//! which roles count as colors with `manage color` and `stop managing`. When a
//! member switches colors, every other managed role they hold is taken away.
//! Roles that carry real server power are never handed out.

pub mod error;
pub mod guild;


use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serenity::model::mention::Mentionable;
use serenity::model::permissions::Permissions;
use serenity::model::prelude::*;

use crate::util::logger;

pub use error::{ColorError, ColorResult};
pub use guild::{DiscordGuild, PermissionsExt, Replier, RoleDescriptor, RoleDirectory};

pub const NAME: &str = "Color";

/// Capabilities that make a role more than cosmetic.
pub const AUTHORITY_PERMISSIONS: Permissions = Permissions::KICK_MEMBERS
	.union(Permissions::BAN_MEMBERS)
	.union(Permissions::ADMINISTRATOR)
	.union(Permissions::MANAGE_CHANNELS)
	.union(Permissions::MANAGE_GUILD)
	.union(Permissions::VIEW_AUDIT_LOG)
	.union(Permissions::MANAGE_MESSAGES)
	.union(Permissions::MUTE_MEMBERS)
	.union(Permissions::DEAFEN_MEMBERS)
	.union(Permissions::MOVE_MEMBERS)
	.union(Permissions::MANAGE_NICKNAMES)
	.union(Permissions::MANAGE_ROLES)
	.union(Permissions::MANAGE_WEBHOOKS)
	.union(Permissions::MANAGE_GUILD_EXPRESSIONS);

/// Usage line, arguments, description.
const HELP: [(&str, &str, &str); 3] = [
	(
		"color me",
		"<color>",
		"assigns the desired color if it is available",
	),
	(
		"manage color",
		"<color list>",
		"remembers each of these roles so they can be removed when a user changes color",
	),
	(
		"stop managing",
		"<color list>",
		"stops managing the given colors",
	),
];

fn normalize(name: &str) -> String {
	name.to_lowercase()
}

/// Role names the bot treats as colors. Names are stored lowercased.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRoles {
	#[serde(default)]
	managed_roles: HashMap<String, bool>,
}

impl ManagedRoles {
	pub fn from_bytes(data: &[u8]) -> ColorResult<ManagedRoles> {
		let roles: ManagedRoles = serde_json::from_slice(data).map_err(ColorError::Deserialize)?;

		// Keys differing only by case collapse into one, managed if any of them is
		let mut managed_roles = HashMap::with_capacity(roles.managed_roles.len());
		for (name, managed) in roles.managed_roles {
			managed_roles
				.entry(normalize(&name))
				.and_modify(|m| *m |= managed)
				.or_insert(managed);
		}

		Ok(ManagedRoles { managed_roles })
	}

	pub fn to_bytes(&self) -> ColorResult<Vec<u8>> {
		serde_json::to_vec(self).map_err(ColorError::Serialize)
	}

	pub fn is_managed(&self, name: &str) -> bool {
		self.managed_roles
			.get(&normalize(name))
			.copied()
			.unwrap_or(false)
	}

	pub fn manage(&mut self, name: &str) {
		self.managed_roles.insert(normalize(name), true);
	}

	/// Returns false if the role wasn't being managed to begin with.
	pub fn unmanage(&mut self, name: &str) -> bool {
		if !self.is_managed(name) {
			return false;
		}

		self.managed_roles.remove(&normalize(name));
		true
	}

	/// Managed names, sorted.
	pub fn names(&self) -> Vec<&str> {
		self.managed_roles
			.iter()
			.filter(|(_, managed)| **managed)
			.map(|(name, _)| name.as_str())
			.sorted()
			.collect()
	}

	pub fn len(&self) -> usize {
		self.managed_roles.values().filter(|managed| **managed).count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn describe(&self) -> String {
		if self.is_empty() {
			"nothing".to_string()
		} else {
			self.names().iter().join(", ")
		}
	}
}

#[derive(Debug, Default)]
pub struct ColorRoleManager {
	roles: ManagedRoles,
}

impl ColorRoleManager {
	pub fn new() -> ColorRoleManager {
		ColorRoleManager::default()
	}

	pub fn with_roles(roles: ManagedRoles) -> ColorRoleManager {
		ColorRoleManager { roles }
	}

	pub fn name(&self) -> &'static str {
		NAME
	}

	pub fn managed(&self) -> &ManagedRoles {
		&self.roles
	}

	pub fn help(prefix: &str) -> Vec<String> {
		HELP.iter()
			.map(|(command, arguments, description)| {
				format!("`{}{} {}` - {}", prefix, command, arguments, description)
			})
			.collect()
	}

	pub fn stats(&self) -> Vec<String> {
		Vec::new()
	}

	/// Replaces the managed roles with the ones in `data`. Broken data is
	/// logged and otherwise ignored.
	pub fn load(&mut self, data: &[u8]) {
		if data.is_empty() {
			return;
		}

		match ManagedRoles::from_bytes(data) {
			Ok(roles) => self.roles = roles,
			Err(e) => logger::warning_fmt!("Error loading {} data: {}", NAME, e),
		}
	}

	pub fn save(&self) -> ColorResult<Vec<u8>> {
		self.roles.to_bytes()
	}

	/// Unmanages a color without talking to Discord.
	pub fn forget(&mut self, color: &str) -> bool {
		self.roles.unmanage(color)
	}

	/// Gives `requester` the color role named in `colors`, taking away every
	/// other managed role they hold.
	pub async fn assign_color<G>(&self, guild: &G, requester: UserId, colors: &[&str]) -> ColorResult
	where
		G: RoleDirectory + Replier + ?Sized,
	{
		let color = match colors {
			[] => return Err(ColorError::MissingColor),
			[color] => normalize(color),
			_ => return Err(ColorError::TooManyColors),
		};

		let role = guild
			.role_by_name(&color)
			.await
			.ok_or_else(|| ColorError::RoleNotFound(color.clone()))?;

		if role.grants_authority() {
			return Err(ColorError::PrivilegedRole(color));
		}

		let held = guild
			.member_roles(requester)
			.await
			.map_err(ColorError::MemberLookup)?;

		let mut to_remove = Vec::new();
		for name in self.roles.names() {
			let Some(managed) = guild.role_by_name(name).await else {
				logger::debug_fmt!("Managed color {} no longer exists", name);
				continue;
			};

			if managed.id != role.id && held.contains(&managed.id) {
				to_remove.push((name.to_string(), managed.id));
			}
		}

		for (name, id) in to_remove {
			if let Err(source) = guild.remove_member_role(requester, id).await {
				ColorError::RemoveFailed { role: name, source }
					.report(guild, requester)
					.await;
			}
		}

		guild
			.add_member_role(requester, role.id)
			.await
			.map_err(|source| ColorError::AddFailed {
				role: color.clone(),
				source,
			})?;

		logger::debug_fmt!("{} is now {}", requester, color);
		guild
			.reply(&format!(
				"You got it, {}! You are now {}",
				requester.mention(),
				color
			))
			.await;

		Ok(())
	}

	/// Starts treating each role in `colors` as a color. Returns whether
	/// anything changed.
	pub async fn manage_colors<G>(
		&mut self,
		guild: &G,
		requester: UserId,
		owner: Option<UserId>,
		colors: &[&str],
	) -> ColorResult<bool>
	where
		G: RoleDirectory + Replier + ?Sized,
	{
		if owner != Some(requester) {
			return Err(ColorError::NotOwner);
		}

		if colors.is_empty() {
			return Err(ColorError::MissingColor);
		}

		let mut changed = false;
		for color in colors.iter().map(|c| normalize(c)) {
			if self.roles.is_managed(&color) {
				ColorError::AlreadyManaged(color)
					.report(guild, requester)
					.await;
				continue;
			}

			let Some(role) = guild.role_by_name(&color).await else {
				ColorError::RoleNotFound(color)
					.report(guild, requester)
					.await;
				continue;
			};

			if role.grants_authority() {
				ColorError::PrivilegedRole(color)
					.report(guild, requester)
					.await;
				continue;
			}

			self.roles.manage(&color);
			changed = true;
		}

		self.reply_managed(guild).await;

		Ok(changed)
	}

	/// Stops treating each role in `colors` as a color. Returns whether
	/// anything changed.
	pub async fn stop_managing<G>(
		&mut self,
		guild: &G,
		requester: UserId,
		owner: Option<UserId>,
		colors: &[&str],
	) -> ColorResult<bool>
	where
		G: RoleDirectory + Replier + ?Sized,
	{
		if owner != Some(requester) {
			return Err(ColorError::NotOwner);
		}

		if colors.is_empty() {
			return Err(ColorError::MissingColor);
		}

		let mut changed = false;
		for color in colors.iter().map(|c| normalize(c)) {
			if !self.roles.unmanage(&color) {
				ColorError::NotManaged(color)
					.report(guild, requester)
					.await;
				continue;
			}

			changed = true;
		}

		self.reply_managed(guild).await;

		Ok(changed)
	}

	async fn reply_managed<G>(&self, guild: &G)
	where
		G: Replier + ?Sized,
	{
		guild
			.reply(&format!(
				"Uh, I guess that means I am managing {} now.",
				self.roles.describe()
			))
			.await;
	}
}
