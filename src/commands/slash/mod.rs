//! # Slash Commands (/)
//!
//! Discord native slash command definitions and registration.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Register one command per message catalog entry
//! - 1.0.0: Initial /start, /help, /set and /falta

mod appointment;
mod catalog;
mod utility;

use anyhow::Result;
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::Command;
use serenity::model::application::interaction::application_command::CommandDataOption;
use serenity::model::id::GuildId;
use serenity::prelude::Context;

use crate::features::catalog::MessageCatalog;

/// Name of the /set date-time option
pub const WHEN_OPTION: &str = "when";

/// Creates every slash command definition: built-ins first, then catalog entries
pub fn create_slash_commands(catalog: &MessageCatalog) -> Vec<CreateApplicationCommand> {
    let mut commands = Vec::new();

    commands.extend(utility::create_commands());
    commands.extend(appointment::create_commands());
    commands.extend(catalog::create_commands(catalog));

    commands
}

/// Registers all slash commands globally
pub async fn register_global_commands(ctx: &Context, catalog: &MessageCatalog) -> Result<()> {
    let slash_commands = create_slash_commands(catalog);
    let count = slash_commands.len();

    Command::set_global_application_commands(&ctx.http, |commands| {
        for command in slash_commands {
            commands.add_application_command(command);
        }
        commands
    })
    .await?;

    info!(
        "Global slash commands registered successfully ({count} commands, {} from the catalog)",
        catalog.len()
    );
    Ok(())
}

/// Registers all slash commands for a specific guild (faster for testing)
pub async fn register_guild_commands(
    ctx: &Context,
    guild_id: GuildId,
    catalog: &MessageCatalog,
) -> Result<()> {
    let slash_commands = create_slash_commands(catalog);
    let count = slash_commands.len();

    guild_id
        .set_application_commands(&ctx.http, |commands| {
            for command in slash_commands {
                commands.add_application_command(command);
            }
            commands
        })
        .await?;

    info!(
        "Guild slash commands registered for guild {guild_id} ({count} commands, {} from the catalog)",
        catalog.len()
    );
    Ok(())
}

/// Utility function to get string option from slash command
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}
