use bevy::prelude::*;
use cameraman_core::entities::player::Player;
use cameraman_core::messages::Messages;
use cameraman_core::waypoints::WaypointMap;

use crate::commands::{
    ArgumentError, CameramanCommandSent, CameramanCommandType, CommandEvent, SendCommandMessageEvent, check_index,
    parse_command, send_message,
};
use crate::plugin::cameraman_plugin::CameramanSet;

/// `/cameraman clear [index]` - forget one waypoint, or all of them.
struct ClearCommand {
    index: Option<usize>,
}

impl CameramanCommandType for ClearCommand {
    const VERB: &'static str = "clear";

    fn from_input(ev: &CameramanCommandSent) -> Result<Self, ArgumentError> {
        match ev.args.as_slice() {
            [] => Ok(Self { index: None }),
            [index] => index
                .parse()
                .map(|index| Self { index: Some(index) })
                .map_err(|_| ArgumentError::InvalidType {
                    arg_index: 0,
                    type_name: "index",
                }),
            _ => Err(ArgumentError::TooManyArguments),
        }
    }
}

fn handle_clear_command(
    mut evr_command: EventReader<CommandEvent<ClearCommand>>,
    q_player: Query<&Player>,
    mut waypoints: ResMut<WaypointMap>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
) {
    for ev in evr_command.read() {
        let Some(entity) = ev.sender.entity() else {
            send_message(&ev.sender, &messages, "error-only-in-game", &[], &mut evw_send_message);
            continue;
        };
        let Ok(player) = q_player.get(entity) else {
            continue;
        };

        let total = waypoints.waypoints(player.id()).map_or(0, |list| list.len());
        if total == 0 {
            send_message(
                &ev.sender,
                &messages,
                "error-no-waypoints-to-remove",
                &[],
                &mut evw_send_message,
            );
            continue;
        }

        match ev.command.index {
            Some(index) => {
                if check_index(index, total, &ev.sender, &messages, &mut evw_send_message) {
                    continue;
                }

                let remaining = waypoints.remove_at(player.id(), index - 1);
                send_message(
                    &ev.sender,
                    &messages,
                    "message-removed-waypoint",
                    &[("index", index.to_string()), ("total", remaining.to_string())],
                    &mut evw_send_message,
                );
            }
            None => {
                waypoints.clear(player.id());
                send_message(
                    &ev.sender,
                    &messages,
                    "message-all-waypoint-removed",
                    &[],
                    &mut evw_send_message,
                );
            }
        }
    }
}

pub(super) fn register(app: &mut App) {
    app.add_event::<CommandEvent<ClearCommand>>().add_systems(
        Update,
        (parse_command::<ClearCommand>, handle_clear_command)
            .chain()
            .in_set(CameramanSet::Commands),
    );
}
