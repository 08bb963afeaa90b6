use std::sync::Arc;

use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;
use tracing::{error, info};

use super::render::help_embed;
use crate::app::{CommandRouter, InboundMessage, Reply};
use crate::domain::{ChannelKey, UserKey};
use crate::error::{Error, Result};
use crate::port::PortfolioStore;

type Data<S> = Arc<CommandRouter<S>>;

/// Connect to Discord and serve messages until the client stops.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the gateway connection
/// fails.
pub async fn run<S>(token: &str, router: Data<S>) -> Result<()>
where
    S: PortfolioStore + 'static,
{
    let intents =
        serenity::GatewayIntents::GUILD_MESSAGES | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::<Data<S>, Error>::builder()
        .options(poise::FrameworkOptions {
            event_handler: |ctx, event, framework, router| {
                Box::pin(handle_event(ctx, event, framework, router))
            },
            ..Default::default()
        })
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                info!(user = %ready.user.name, guilds = ready.guilds.len(), "Discord gateway ready");
                Ok(router)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

async fn handle_event<S>(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'_, Data<S>, Error>,
    router: &Data<S>,
) -> Result<()>
where
    S: PortfolioStore + 'static,
{
    let serenity::FullEvent::Message { new_message } = event else {
        return Ok(());
    };

    let bot = UserKey::from(framework.bot_id.get());
    let message = inbound_message(new_message);

    for reply in router.dispatch(&bot, &message).await {
        send_reply(ctx, new_message.channel_id, reply).await;
    }
    Ok(())
}

async fn send_reply(ctx: &serenity::Context, channel: serenity::ChannelId, reply: Reply) {
    let result = match reply {
        Reply::Text(text) => channel.say(ctx, text).await,
        Reply::Embed(help) => {
            channel
                .send_message(ctx, serenity::CreateMessage::new().embed(help_embed(&help)))
                .await
        }
    };

    if let Err(e) = result {
        error!(channel = channel.get(), error = %e, "Failed to send Discord message");
    }
}

/// Convert a Discord message into the router's platform-neutral form.
#[must_use]
pub fn inbound_message(message: &serenity::Message) -> InboundMessage {
    let timestamp =
        DateTime::<Utc>::from_timestamp(message.timestamp.unix_timestamp(), 0).unwrap_or_else(Utc::now);

    InboundMessage {
        author: UserKey::from(message.author.id.get()),
        author_name: message.author.name.clone(),
        channel: ChannelKey::new(message.channel_id.get()),
        text: message.content.clone(),
        timestamp,
    }
}
