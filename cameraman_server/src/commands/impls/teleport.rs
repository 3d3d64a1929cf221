use bevy::prelude::*;
use cameraman_core::camera::Pose;
use cameraman_core::entities::player::Player;
use cameraman_core::messages::Messages;
use cameraman_core::waypoints::WaypointMap;

use crate::camera::apply_pose;
use crate::commands::{
    ArgumentError, CameramanCommandSent, CameramanCommandType, CommandEvent, SendCommandMessageEvent, check_index,
    parse_command, send_message,
};
use crate::netty::ResyncPlayerPositionEvent;
use crate::plugin::cameraman_plugin::CameramanSet;

/// `/cameraman goto <index>` - jump straight to a waypoint.
struct GotoCommand {
    index: usize,
}

impl CameramanCommandType for GotoCommand {
    const VERB: &'static str = "goto";

    fn from_input(ev: &CameramanCommandSent) -> Result<Self, ArgumentError> {
        match ev.args.as_slice() {
            [] => Err(ArgumentError::TooFewArguments),
            [index] => index
                .parse()
                .map(|index| Self { index })
                .map_err(|_| ArgumentError::InvalidType {
                    arg_index: 0,
                    type_name: "index",
                }),
            _ => Err(ArgumentError::TooManyArguments),
        }
    }
}

fn handle_goto_command(
    mut evr_command: EventReader<CommandEvent<GotoCommand>>,
    mut q_player: Query<(&Player, &mut Pose)>,
    waypoints: Res<WaypointMap>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
    mut evw_resync: EventWriter<ResyncPlayerPositionEvent>,
) {
    for ev in evr_command.read() {
        let Some(entity) = ev.sender.entity() else {
            send_message(&ev.sender, &messages, "error-only-in-game", &[], &mut evw_send_message);
            continue;
        };
        let Ok((player, mut pose)) = q_player.get_mut(entity) else {
            continue;
        };

        let recorded = waypoints.waypoints(player.id()).unwrap_or(&[]);
        if recorded.is_empty() {
            send_message(
                &ev.sender,
                &messages,
                "error-no-waypoints-to-teleport",
                &[],
                &mut evw_send_message,
            );
            continue;
        }

        let index = ev.command.index;
        if check_index(index, recorded.len(), &ev.sender, &messages, &mut evw_send_message) {
            continue;
        }

        apply_pose(&mut pose, &recorded[index - 1]);
        evw_resync.write(ResyncPlayerPositionEvent { player: entity });

        send_message(
            &ev.sender,
            &messages,
            "message-teleported",
            &[("index", index.to_string())],
            &mut evw_send_message,
        );
    }
}

pub(super) fn register(app: &mut App) {
    app.add_event::<CommandEvent<GotoCommand>>().add_systems(
        Update,
        (parse_command::<GotoCommand>, handle_goto_command)
            .chain()
            .in_set(CameramanSet::Commands),
    );
}
