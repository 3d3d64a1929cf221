use bevy::prelude::*;
use cameraman_core::camera::Pose;
use cameraman_core::entities::player::Player;
use cameraman_core::messages::Messages;
use cameraman_core::waypoints::WaypointMap;

use crate::commands::{
    ArgumentError, CameramanCommandSent, CameramanCommandType, CommandEvent, SendCommandMessageEvent, check_index,
    parse_command, send_message,
};
use crate::plugin::cameraman_plugin::CameramanSet;

/// `/cameraman p [index]` - record or overwrite a waypoint.
#[derive(Debug)]
struct PointCommand {
    index: Option<usize>,
}

impl CameramanCommandType for PointCommand {
    const VERB: &'static str = "p";

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

fn handle_point_command(
    mut evr_command: EventReader<CommandEvent<PointCommand>>,
    q_player: Query<(&Player, &Pose)>,
    mut waypoints: ResMut<WaypointMap>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
) {
    for ev in evr_command.read() {
        let Some(entity) = ev.sender.entity() else {
            send_message(&ev.sender, &messages, "error-only-in-game", &[], &mut evw_send_message);
            continue;
        };
        let Ok((player, pose)) = q_player.get(entity) else {
            continue;
        };

        match ev.command.index {
            Some(index) => {
                let total = waypoints.ensure(player.id()).len();
                if check_index(index, total, &ev.sender, &messages, &mut evw_send_message) {
                    continue;
                }

                waypoints.set(player.id(), index - 1, *pose);
                send_message(
                    &ev.sender,
                    &messages,
                    "message-reset-waypoint",
                    &[("index", index.to_string()), ("total", total.to_string())],
                    &mut evw_send_message,
                );
            }
            None => {
                let index = waypoints.append(player.id(), *pose);
                send_message(
                    &ev.sender,
                    &messages,
                    "message-added-waypoint",
                    &[("index", index.to_string())],
                    &mut evw_send_message,
                );
            }
        }
    }
}

pub(super) fn register(app: &mut App) {
    app.add_event::<CommandEvent<PointCommand>>().add_systems(
        Update,
        (parse_command::<PointCommand>, handle_point_command)
            .chain()
            .in_set(CameramanSet::Commands),
    );
}
