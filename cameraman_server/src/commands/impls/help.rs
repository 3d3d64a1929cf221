use bevy::prelude::*;
use cameraman_core::messages::Messages;

use crate::commands::{
    ArgumentError, CameramanCommand, CameramanCommandSent, CameramanCommandType, CameramanCommands, CommandEvent,
    CommandSender, SendCommandMessageEvent, parse_command, send_prefixed,
};
use crate::plugin::cameraman_plugin::CameramanSet;

/// `/cameraman help [verb]` - the help pages.
struct HelpCommand {
    topic: Option<String>,
}

impl CameramanCommandType for HelpCommand {
    const VERB: &'static str = "help";

    fn from_input(ev: &CameramanCommandSent) -> Result<Self, ArgumentError> {
        match ev.args.as_slice() {
            [] => Ok(Self { topic: None }),
            [topic] => Ok(Self {
                topic: Some(topic.to_lowercase()),
            }),
            _ => Err(ArgumentError::TooManyArguments),
        }
    }
}

fn usage_line(info: &CameramanCommand) -> String {
    if info.usage.is_empty() {
        format!("/cameraman {} - {}", info.verb, info.description)
    } else {
        format!("/cameraman {} {} - {}", info.verb, info.usage, info.description)
    }
}

/// Sends the help of one known verb, or the whole command listing.
pub(super) fn send_help_pages(
    sender: &CommandSender,
    topic: Option<&str>,
    commands: &CameramanCommands,
    messages: &Messages,
    evw_send_message: &mut EventWriter<SendCommandMessageEvent>,
) {
    if let Some(topic) = topic
        && let Some(info) = commands.get(topic)
    {
        send_prefixed(sender, messages, usage_line(info), evw_send_message);
        return;
    }

    if let Some(header) = messages.get(
        "help-header",
        &[("version", env!("CARGO_PKG_VERSION").to_owned())],
        None,
    ) {
        sender.send(header, evw_send_message);
    }

    for info in commands.iter() {
        sender.send(usage_line(info), evw_send_message);
    }
}

fn handle_help_command(
    mut evr_command: EventReader<CommandEvent<HelpCommand>>,
    commands: Res<CameramanCommands>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
) {
    for ev in evr_command.read() {
        send_help_pages(
            &ev.sender,
            ev.command.topic.as_deref(),
            &commands,
            &messages,
            &mut evw_send_message,
        );
    }
}

pub(super) fn register(app: &mut App) {
    app.add_event::<CommandEvent<HelpCommand>>().add_systems(
        Update,
        (parse_command::<HelpCommand>, handle_help_command)
            .chain()
            .in_set(CameramanSet::Commands),
    );
}
