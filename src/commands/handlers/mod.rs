//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

pub mod appointment;
pub mod utility;

use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Create all built-in command handlers
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(utility::UtilityHandler),
        Arc::new(appointment::AppointmentHandler),
    ]
}

/// Names owned by built-in handlers; catalog entries may not reuse them
pub fn builtin_command_names() -> Vec<&'static str> {
    create_all_handlers()
        .iter()
        .flat_map(|handler| handler.command_names().iter().copied())
        .collect()
}
