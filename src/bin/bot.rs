use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use cita::command_handler::ERROR_REPLY;
use cita::commands::{
    builtin_command_names, register_global_commands, register_guild_commands, CommandContext,
    CommandHandler, CommandRegistry,
};
use cita::core::Config;
use cita::features::analytics::UsageTracker;
use cita::features::appointments::{
    AppointmentService, Appointments, CountdownCalculator, JsonFileStore,
};
use cita::features::catalog::MessageCatalog;

struct Handler {
    command_handler: Arc<CommandHandler>,
    catalog: Arc<MessageCatalog>,
    guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Guild commands update instantly, global ones can take up to an hour
        if let Some(guild_id) = self.guild_id {
            info!("🔧 Development mode: Registering commands for guild {guild_id}");
            if let Err(e) = register_guild_commands(&ctx, guild_id, &self.catalog).await {
                error!("❌ Failed to register guild slash commands: {e}");
            }
        } else {
            info!("🌍 Production mode: Registering commands globally");
            if let Err(e) = register_global_commands(&ctx, &self.catalog).await {
                error!("❌ Failed to register global slash commands: {e}");
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::ApplicationCommand(command) = interaction else {
            return;
        };

        // Failures are logged by the dispatcher with their request id
        if self
            .command_handler
            .handle_slash_command(&ctx, &command)
            .await
            .is_err()
        {
            if let Err(why) = command
                .create_interaction_response(&ctx.http, |response| {
                    response
                        .kind(InteractionResponseType::ChannelMessageWithSource)
                        .interaction_response_data(|message| message.content(ERROR_REPLY))
                })
                .await
            {
                error!("Failed to send error message: {why}");
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Cita Bot v{}...", cita::features::get_bot_version());

    let catalog = Arc::new(MessageCatalog::load(
        &config.messages_path,
        &builtin_command_names(),
    )?);

    info!("💾 Appointment file: {}", config.appointment_path.display());
    let appointments = AppointmentService::new(
        Appointments::new(Arc::new(JsonFileStore::new(&config.appointment_path))),
        CountdownCalculator::with_offset_hours(config.clock_offset_hours),
    );

    if config.analytics_webhook_url.is_some() {
        info!("📈 Usage events will be posted to the analytics webhook");
    }
    let usage_tracker = UsageTracker::new(config.analytics_webhook_url.clone());

    let context = CommandContext::new(appointments, Arc::clone(&catalog), usage_tracker);
    let command_handler = CommandHandler::new(context, CommandRegistry::with_builtin_handlers());

    let handler = Handler {
        command_handler: Arc::new(command_handler),
        catalog,
        guild_id: config.discord_guild_id,
    };

    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
