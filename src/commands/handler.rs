//! Slash command handler trait and reply helper
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: `respond` splits long texts into a reply plus follow-ups
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;
use crate::core::chunk_for_message;

/// Trait for slash command handlers
///
/// Each command handler implements this trait to process one or more slash commands.
/// Handlers are registered with a CommandRegistry and dispatched based on command name.
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()>;
}

/// Reply to an interaction, sending anything past the first 2000 bytes as follow-ups
pub async fn respond(
    serenity_ctx: &Context,
    command: &ApplicationCommandInteraction,
    text: &str,
) -> Result<()> {
    let mut chunks = chunk_for_message(text).into_iter();
    let first = chunks.next().unwrap_or_default();

    command
        .create_interaction_response(&serenity_ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(first))
        })
        .await?;

    for chunk in chunks {
        command
            .create_followup_message(&serenity_ctx.http, |message| message.content(chunk))
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn SlashCommandHandler) {}
}
