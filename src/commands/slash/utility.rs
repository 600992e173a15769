//! Utility slash command definitions

use serenity::builder::CreateApplicationCommand;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        CreateApplicationCommand::default()
            .name("start")
            .description("Saluda al bot")
            .to_owned(),
        CreateApplicationCommand::default()
            .name("help")
            .description("Lista todos los comandos")
            .to_owned(),
    ]
}
