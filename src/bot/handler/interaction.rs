//! Slash command dispatch.
//!
//! Replies are deferred first because a roll can wait on the user's lock for longer
//! than Discord's initial response window.

use serenity::all::{
    CommandInteraction, Context, CreateEmbed, EditInteractionResponse, Interaction,
};

use crate::{
    bot::{
        command::{self, ADMIN_COMMAND, GACHA_COMMAND},
        embed,
        handler::Handler,
    },
    error::AppError,
};

/// Handles an interaction, ignoring anything other than slash commands.
pub async fn handle_interaction_create(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if let Err(e) = respond(handler, &ctx, &command).await {
        tracing::error!(
            "Failed to respond to /{} from user {}: {}",
            command.data.name,
            command.user.id,
            e
        );
    }
}

async fn respond(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let reply = match command.data.name.as_str() {
        GACHA_COMMAND => command::gacha::handle(&handler.state, command)
            .await
            .unwrap_or_else(|e| {
                if matches!(&e, AppError::GachaErr(err) if err.is_retryable()) {
                    tracing::debug!("User {} was told to retry later", command.user.id);
                }
                embed::error(&e.user_message())
            }),
        ADMIN_COMMAND => command::admin::handle(
            &handler.state,
            command,
            &handler.settings_path,
            &handler.roster_path,
        )
        .await
        .unwrap_or_else(|e| admin_error(&e)),
        other => {
            tracing::warn!("Received unknown command /{}", other);
            embed::error("Unknown command")
        }
    };

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(reply))
        .await?;

    Ok(())
}

/// Administrators see the underlying error so they can fix the gacha files.
fn admin_error(err: &AppError) -> CreateEmbed {
    match err {
        AppError::Forbidden(msg) => embed::error(msg),
        err => {
            tracing::error!("Admin command failed: {}", err);
            embed::error(&format!("Admin command failed: {}", err))
        }
    }
}
