//! Environment-driven configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Context, Result};
use serenity::model::id::GuildId;
use std::env;
use std::path::PathBuf;

use crate::features::appointments::DEFAULT_CLOCK_OFFSET_HOURS;

pub const DEFAULT_APPOINTMENT_PATH: &str = "appointment.json";
pub const DEFAULT_MESSAGES_PATH: &str = "messages.yaml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Register commands on this guild only (instant updates while developing)
    pub discord_guild_id: Option<GuildId>,
    pub log_level: String,
    pub appointment_path: PathBuf,
    pub messages_path: PathBuf,
    pub analytics_webhook_url: Option<String>,
    pub clock_offset_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let discord_token = get("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?;

        let discord_guild_id = get("DISCORD_GUILD_ID")
            .map(|raw| {
                raw.parse::<u64>()
                    .map(GuildId)
                    .map_err(|e| anyhow!("failed to parse DISCORD_GUILD_ID='{raw}': {e}"))
            })
            .transpose()?;

        let clock_offset_hours = match get("CLOCK_OFFSET_HOURS") {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|e| anyhow!("failed to parse CLOCK_OFFSET_HOURS='{raw}': {e}"))?,
            None => DEFAULT_CLOCK_OFFSET_HOURS,
        };
        if !(-24..=24).contains(&clock_offset_hours) {
            return Err(anyhow!(
                "CLOCK_OFFSET_HOURS must be between -24 and 24, got {clock_offset_hours}"
            ));
        }

        Ok(Config {
            discord_token,
            discord_guild_id,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            appointment_path: get("APPOINTMENT_PATH")
                .unwrap_or_else(|| DEFAULT_APPOINTMENT_PATH.to_string())
                .into(),
            messages_path: get("MESSAGES_CONFIG_PATH")
                .unwrap_or_else(|| DEFAULT_MESSAGES_PATH.to_string())
                .into(),
            analytics_webhook_url: get("ANALYTICS_WEBHOOK_URL"),
            clock_offset_hours,
        })
    }
}
