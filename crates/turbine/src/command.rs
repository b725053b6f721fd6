//! Administrative command handling.
//!
//! One command with an optional action argument. A missing or blank
//! action defaults to `reload`; anything unrecognized gets a usage
//! message. Success and failure are reported back through the responder
//! as colored chat messages; this runs embedded in a long-lived host
//! process, so there are no exit codes.

use tracing::info;

use turbine_host::{Color, CommandResponder, Message};

use crate::addon::TurbineAddon;

/// Name the host should register the command under.
pub const COMMAND_NAME: &str = "turbine";

/// Handles one invocation of the admin command.
pub async fn handle_command(
    addon: &TurbineAddon,
    action: Option<&str>,
    responder: &dyn CommandResponder,
) {
    let action = action.map(str::trim).unwrap_or("");
    let action = if action.is_empty() { "reload" } else { action };

    if action.eq_ignore_ascii_case("reload") {
        info!("Reload requested via /{}", COMMAND_NAME);
        let message = if addon.reload().await {
            Message::raw("[Turbine] Reloaded config").color(Color::Green)
        } else {
            Message::raw("[Turbine] Failed to reload config; see logs").color(Color::Red)
        };
        responder.send_message(message);
        return;
    }

    responder.send_message(Message::join([
        Message::raw("[Turbine] Usage: ").color(Color::Yellow),
        Message::raw(format!("/{COMMAND_NAME} reload")).color(Color::White),
    ]));
}
