//! Discord identifiers the bot operates with, and the bot token.

use crate::errors::Result;
use serde::Deserialize;
use std::num::NonZeroU64;

/// Environment variable holding the bot token
pub const TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

/// Permissions integer requested by the invite link (administrator)
const INVITE_PERMISSIONS: u64 = 8;

/// Identifiers of the application, the server it serves and the admin role.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    /// Application (bot) id, used for the invite link
    pub application_id: NonZeroU64,
    /// Guild the slash commands are registered in
    pub guild_id: NonZeroU64,
    /// Role required for `/setup` and `/add`
    pub admin_role_id: NonZeroU64,
}

impl DiscordConfig {
    /// Builds the OAuth2 URL that adds the bot to a server.
    #[must_use]
    pub fn invite_link(&self) -> String {
        format!(
            "https://discord.com/api/oauth2/authorize?client_id={}&permissions={INVITE_PERMISSIONS}&scope=bot%20applications.commands",
            self.application_id
        )
    }
}

/// Reads the bot token from [`TOKEN_VAR`].
///
/// # Errors
/// Returns `Error::EnvVar` when the variable is unset or not valid unicode.
pub fn bot_token() -> Result<String> {
    std::env::var(TOKEN_VAR).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_invite_link() {
        let config = DiscordConfig {
            application_id: NonZeroU64::new(42).unwrap(),
            guild_id: NonZeroU64::new(1).unwrap(),
            admin_role_id: NonZeroU64::new(2).unwrap(),
        };
        assert_eq!(
            config.invite_link(),
            "https://discord.com/api/oauth2/authorize?client_id=42&permissions=8&scope=bot%20applications.commands"
        );
    }
}
