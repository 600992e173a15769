//! # Command System
//!
//! Slash command (/) handling for Discord interactions.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Fall back to the message catalog for unregistered names
//! - 1.0.0: Handler trait, context and registry

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod slash;

pub use crate::command_handler::CommandHandler;

pub use context::CommandContext;
pub use handler::{respond, SlashCommandHandler};
pub use handlers::builtin_command_names;
pub use registry::CommandRegistry;

pub use slash::{
    create_slash_commands, get_string_option, register_global_commands, register_guild_commands,
};
