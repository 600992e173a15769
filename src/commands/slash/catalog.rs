//! One option-less slash command per catalog entry

use serenity::builder::CreateApplicationCommand;

use crate::features::catalog::MessageCatalog;

pub fn create_commands(catalog: &MessageCatalog) -> Vec<CreateApplicationCommand> {
    catalog
        .entries()
        .iter()
        .map(|entry| {
            CreateApplicationCommand::default()
                .name(&entry.command)
                .description(entry.description())
                .to_owned()
        })
        .collect()
}
