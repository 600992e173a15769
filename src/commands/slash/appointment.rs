//! Appointment slash command definitions

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use super::WHEN_OPTION;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_set_command(), create_falta_command()]
}

fn create_set_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("set")
        .description("Guarda la fecha y hora de la cita")
        .create_option(|option| {
            option
                .name(WHEN_OPTION)
                .description("Fecha y hora como YYYY-MM-DD HH:MM")
                .kind(CommandOptionType::String)
                .required(true)
                .min_length(1)
                .max_length(64)
        })
        .to_owned()
}

fn create_falta_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("falta")
        .description("Cuánto falta para la cita")
        .to_owned()
}
