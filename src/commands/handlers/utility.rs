//! Utility command handlers
//!
//! Handles: start, help
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::{respond, SlashCommandHandler};
use crate::features::catalog::MessageCatalog;

pub const GREETING: &str = "¡Hola! Soy un bot creado para vosotros dos. \
Escribe `/set` para guardar una cita y `/falta` para ver cuánto falta 🤍";

/// Handler for utility commands: start, help
pub struct UtilityHandler;

#[async_trait]
impl SlashCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "help"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "start" => respond(serenity_ctx, command, GREETING).await,
            "help" => self.handle_help(&ctx, serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

impl UtilityHandler {
    async fn handle_help(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        respond(serenity_ctx, command, &help_text(&ctx.catalog)).await?;
        info!("Help command completed for user {}", command.user.id);
        Ok(())
    }
}

pub fn help_text(catalog: &MessageCatalog) -> String {
    let mut text = format!(
        "**Cita Bot v{}**\n\
        `/start` - Saludar\n\
        `/help` - Mostrar esta ayuda\n\
        `/set <YYYY-MM-DD HH:MM>` - Guardar la cita\n\
        `/falta` - Cuánto falta para la cita",
        crate::features::get_bot_version()
    );

    if !catalog.is_empty() {
        text.push_str("\n\n**Mensajes:**");
        for entry in catalog.entries() {
            text.push_str(&format!("\n`/{}` - {}", entry.command, entry.description()));
        }
    }

    text
}
