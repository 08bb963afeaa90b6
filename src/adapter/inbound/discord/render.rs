//! Conversion of router replies into Discord message builders.

use poise::serenity_prelude as serenity;

use crate::app::HelpEmbed;

/// Render the help listing as a Discord embed.
#[must_use]
pub fn help_embed(help: &HelpEmbed) -> serenity::CreateEmbed {
    help.fields.iter().fold(
        serenity::CreateEmbed::new()
            .title(help.title)
            .description(help.description)
            .colour(help.color),
        |embed, field| embed.field(field.name, field.value, field.inline),
    )
}
