use bevy::prelude::*;
use cameraman_core::messages::Messages;

use crate::camera::{CameraSession, StopCameraTravelEvent};
use crate::commands::{
    ArgumentError, CameramanCommandSent, CameramanCommandType, CommandEvent, SendCommandMessageEvent, parse_command,
    send_message,
};
use crate::plugin::cameraman_plugin::CameramanSet;

/// `/cameraman stop` - interrupt the running travel.
struct StopCommand;

impl CameramanCommandType for StopCommand {
    const VERB: &'static str = "stop";

    fn from_input(ev: &CameramanCommandSent) -> Result<Self, ArgumentError> {
        if !ev.args.is_empty() {
            return Err(ArgumentError::TooManyArguments);
        }

        Ok(StopCommand)
    }
}

fn handle_stop_command(
    mut evr_command: EventReader<CommandEvent<StopCommand>>,
    q_sessions: Query<(), With<CameraSession>>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
    mut evw_stop: EventWriter<StopCameraTravelEvent>,
) {
    for ev in evr_command.read() {
        let Some(entity) = ev.sender.entity() else {
            send_message(&ev.sender, &messages, "error-only-in-game", &[], &mut evw_send_message);
            continue;
        };

        if !q_sessions.contains(entity) {
            send_message(
                &ev.sender,
                &messages,
                "error-travels-already-interrupted",
                &[],
                &mut evw_send_message,
            );
            continue;
        }

        evw_stop.write(StopCameraTravelEvent { player: entity });
        send_message(
            &ev.sender,
            &messages,
            "message-travelling-interrupted",
            &[],
            &mut evw_send_message,
        );
    }
}

pub(super) fn register(app: &mut App) {
    app.add_event::<CommandEvent<StopCommand>>().add_systems(
        Update,
        (parse_command::<StopCommand>, handle_stop_command)
            .chain()
            .in_set(CameramanSet::Commands),
    );
}
