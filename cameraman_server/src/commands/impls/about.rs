use bevy::prelude::*;
use cameraman_core::messages::Messages;

use crate::commands::{
    ArgumentError, CameramanCommandSent, CameramanCommandType, CommandEvent, SendCommandMessageEvent, parse_command,
    send_message,
};
use crate::plugin::cameraman_plugin::CameramanSet;

/// `/cameraman about` - plugin info.
struct AboutCommand;

impl CameramanCommandType for AboutCommand {
    const VERB: &'static str = "about";

    fn from_input(ev: &CameramanCommandSent) -> Result<Self, ArgumentError> {
        if !ev.args.is_empty() {
            return Err(ArgumentError::TooManyArguments);
        }

        Ok(AboutCommand)
    }
}

fn handle_about_command(
    mut evr_command: EventReader<CommandEvent<AboutCommand>>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
) {
    for ev in evr_command.read() {
        send_message(
            &ev.sender,
            &messages,
            "about",
            &[("version", env!("CARGO_PKG_VERSION").to_owned())],
            &mut evw_send_message,
        );
    }
}

pub(super) fn register(app: &mut App) {
    app.add_event::<CommandEvent<AboutCommand>>().add_systems(
        Update,
        (parse_command::<AboutCommand>, handle_about_command)
            .chain()
            .in_set(CameramanSet::Commands),
    );
}
