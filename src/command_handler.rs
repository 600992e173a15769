//! Interaction dispatcher
//!
//! Resolves a slash command name to a built-in handler or a catalog text,
//! runs it to completion, then queues a usage event.
//!
//! - **Version**: 1.1.1
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.1: Failures logged once here; callers only send the apology
//! - 1.1.0: Usage event queued after every command, with outcome
//! - 1.0.0: Registry dispatch with catalog fallback

use anyhow::Result;
use log::{debug, error, info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handler::{respond, SlashCommandHandler};
use crate::commands::registry::CommandRegistry;
use crate::features::analytics::{CommandEvent, CommandOutcome};
use crate::features::catalog::CatalogEntry;

pub const UNKNOWN_COMMAND: &str = "❓ No conozco ese comando. Prueba `/help`.";
pub const ERROR_REPLY: &str = "Lo siento, ha ocurrido un error al procesar tu comando.";

/// Where a command name resolves to
pub enum Route<'a> {
    Handler(Arc<dyn SlashCommandHandler>),
    Catalog(&'a CatalogEntry),
    Unknown,
}

#[derive(Clone)]
pub struct CommandHandler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new(context: CommandContext, registry: CommandRegistry) -> Self {
        Self {
            context: Arc::new(context),
            registry,
        }
    }

    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Built-in handlers win over catalog entries of the same name
    pub fn route(&self, name: &str) -> Route<'_> {
        if let Some(handler) = self.registry.get(name) {
            Route::Handler(handler)
        } else if let Some(entry) = self.context.catalog.get(name) {
            Route::Catalog(entry)
        } else {
            Route::Unknown
        }
    }

    /// Run a command end to end. A returned error has already been logged.
    pub async fn handle_slash_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        let user_id = command.user.id.to_string();
        let channel_id = command.channel_id.to_string();
        let guild_id = command.guild_id.map(|id| id.to_string());

        info!(
            "[{}] 📥 Slash command received | Command: {} | User: {} | Channel: {} | Guild: {}",
            request_id,
            command.data.name,
            user_id,
            channel_id,
            guild_id.as_deref().unwrap_or("DM")
        );

        let result = self.dispatch(ctx, command, request_id).await;

        let outcome = match &result {
            Ok(()) => {
                info!("[{request_id}] ✅ /{} completed", command.data.name);
                CommandOutcome::Ok
            }
            Err(e) => {
                error!("[{request_id}] ❌ /{} failed: {e}", command.data.name);
                CommandOutcome::Error
            }
        };

        self.context.usage_tracker.log_command(CommandEvent::new(
            &command.data.name,
            &user_id,
            &command.user.name,
            &channel_id,
            guild_id.as_deref(),
            outcome,
        ));

        result
    }

    async fn dispatch(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        match self.route(&command.data.name) {
            Route::Handler(handler) => {
                debug!("[{request_id}] 🎯 Built-in handler for /{}", command.data.name);
                handler.handle(Arc::clone(&self.context), ctx, command).await
            }
            Route::Catalog(entry) => {
                debug!(
                    "[{request_id}] 💌 Catalog message /{} ({} bytes)",
                    entry.command,
                    entry.text.len()
                );
                respond(ctx, command, &entry.text).await
            }
            Route::Unknown => {
                warn!("[{request_id}] Unknown command: {}", command.data.name);
                respond(ctx, command, UNKNOWN_COMMAND).await
            }
        }
    }
}
