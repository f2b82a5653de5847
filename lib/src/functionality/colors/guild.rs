//! What the color commands need from a guild, and the Discord-backed
//! implementation of it.

use async_trait::async_trait;
use serenity::model::permissions::Permissions;
use serenity::model::prelude::*;
use serenity::prelude::*;

use super::AUTHORITY_PERMISSIONS;
use crate::util::traits::{MessageExt, ResultExt};

pub trait PermissionsExt {
	/// Whether any of these permissions lets a member moderate the server.
	fn grants_authority(&self) -> bool;
}

impl PermissionsExt for Permissions {
	fn grants_authority(&self) -> bool {
		self.intersects(AUTHORITY_PERMISSIONS)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDescriptor {
	pub id: RoleId,
	pub name: String,
	pub permissions: Permissions,
}

impl RoleDescriptor {
	pub fn grants_authority(&self) -> bool {
		self.permissions.grants_authority()
	}

	fn matches(&self, name: &str) -> bool {
		self.name.to_lowercase() == name.to_lowercase()
	}
}

impl From<&Role> for RoleDescriptor {
	fn from(role: &Role) -> Self {
		RoleDescriptor {
			id: role.id,
			name: role.name.clone(),
			permissions: role.permissions,
		}
	}
}

#[async_trait]
pub trait RoleDirectory: Send + Sync {
	/// Case-insensitive lookup.
	async fn role_by_name(&self, name: &str) -> Option<RoleDescriptor>;

	async fn member_roles(&self, user: UserId) -> anyhow::Result<Vec<RoleId>>;

	async fn add_member_role(&self, user: UserId, role: RoleId) -> anyhow::Result<()>;

	async fn remove_member_role(&self, user: UserId, role: RoleId) -> anyhow::Result<()>;
}

#[async_trait]
pub trait Replier: Send + Sync {
	async fn reply(&self, content: &str);
}

/// The guild a command message was sent in.
pub struct DiscordGuild<'a> {
	ctx: &'a Context,
	msg: &'a Message,
	guild_id: GuildId,
}

impl<'a> DiscordGuild<'a> {
	pub fn new(ctx: &'a Context, msg: &'a Message, guild_id: GuildId) -> DiscordGuild<'a> {
		DiscordGuild { ctx, msg, guild_id }
	}

	fn find<'r>(roles: impl IntoIterator<Item = &'r Role>, name: &str) -> Option<RoleDescriptor> {
		roles
			.into_iter()
			.map(RoleDescriptor::from)
			.find(|role| role.matches(name))
	}
}

#[async_trait]
impl RoleDirectory for DiscordGuild<'_> {
	async fn role_by_name(&self, name: &str) -> Option<RoleDescriptor> {
		let cached = self
			.ctx
			.cache
			.guild(self.guild_id)
			.map(|guild| Self::find(guild.roles.values(), name));

		if let Some(found) = cached {
			return found;
		}

		let roles = self
			.guild_id
			.roles(&self.ctx.http)
			.await
			.ok_or_log(&format!("Could not fetch roles of guild {}", self.guild_id))?;

		Self::find(roles.values(), name)
	}

	async fn member_roles(&self, user: UserId) -> anyhow::Result<Vec<RoleId>> {
		let member = self.guild_id.member(self.ctx, user).await?;

		Ok(member.roles)
	}

	async fn add_member_role(&self, user: UserId, role: RoleId) -> anyhow::Result<()> {
		self.ctx
			.http
			.add_member_role(self.guild_id, user, role, Some("Color change"))
			.await?;

		Ok(())
	}

	async fn remove_member_role(&self, user: UserId, role: RoleId) -> anyhow::Result<()> {
		self.ctx
			.http
			.remove_member_role(self.guild_id, user, role, Some("Color change"))
			.await?;

		Ok(())
	}
}

#[async_trait]
impl Replier for DiscordGuild<'_> {
	async fn reply(&self, content: &str) {
		self.msg.say_report(self.ctx, content).await;
	}
}
