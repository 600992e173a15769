//! Appointment command handlers
//!
//! Handles: set, falta
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
use crate::commands::slash::{get_string_option, WHEN_OPTION};

/// Handler for /set and /falta
pub struct AppointmentHandler;

#[async_trait]
impl SlashCommandHandler for AppointmentHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["set", "falta"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "set" => self.handle_set(&ctx, serenity_ctx, command).await,
            "falta" => self.handle_falta(&ctx, serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

impl AppointmentHandler {
    /// Handle /set - store a new appointment
    async fn handle_set(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let when = get_string_option(&command.data.options, WHEN_OPTION).unwrap_or_default();

        let reply = ctx.appointments.set_appointment(&when).await?;
        respond(serenity_ctx, command, &reply).await?;

        info!("Set command completed for user {} ({when:?})", command.user.id);
        Ok(())
    }

    /// Handle /falta - countdown to the stored appointment
    async fn handle_falta(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let reply = ctx.appointments.get_countdown().await?;
        respond(serenity_ctx, command, &reply).await?;

        info!("Countdown command completed for user {}", command.user.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_handler_commands() {
        let names = AppointmentHandler.command_names();
        assert_eq!(names, &["set", "falta"]);
    }
}
