use bevy::prelude::*;
use cameraman_core::camera::{MIN_SLOWNESS, build_movements};
use cameraman_core::entities::player::Player;
use cameraman_core::messages::Messages;
use cameraman_core::waypoints::WaypointMap;

use crate::camera::StartCameraTravelEvent;
use crate::commands::{
    ArgumentError, CameramanCommandSent, CameramanCommandType, CommandEvent, SendCommandMessageEvent, parse_command,
    send_message,
};
use crate::plugin::cameraman_plugin::CameramanSet;

/// `/cameraman start <slowness>` - begin a travel.
#[derive(Debug)]
struct StartCommand {
    slowness: f64,
}

impl CameramanCommandType for StartCommand {
    const VERB: &'static str = "start";

    fn from_input(ev: &CameramanCommandSent) -> Result<Self, ArgumentError> {
        match ev.args.as_slice() {
            [] => Err(ArgumentError::TooFewArguments),
            [slowness] => slowness
                .parse()
                .map(|slowness| Self { slowness })
                .map_err(|_| ArgumentError::InvalidType {
                    arg_index: 0,
                    type_name: "slowness",
                }),
            _ => Err(ArgumentError::TooManyArguments),
        }
    }
}

fn handle_start_command(
    mut evr_command: EventReader<CommandEvent<StartCommand>>,
    q_player: Query<&Player>,
    waypoints: Res<WaypointMap>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
    mut evw_start: EventWriter<StartCameraTravelEvent>,
) {
    for ev in evr_command.read() {
        let Some(entity) = ev.sender.entity() else {
            send_message(&ev.sender, &messages, "error-only-in-game", &[], &mut evw_send_message);
            continue;
        };
        let Ok(player) = q_player.get(entity) else {
            continue;
        };

        let recorded = waypoints.waypoints(player.id()).unwrap_or(&[]);
        if recorded.len() < 2 {
            send_message(
                &ev.sender,
                &messages,
                "error-too-few-waypoints",
                &[],
                &mut evw_send_message,
            );
            continue;
        }

        if ev.command.slowness < MIN_SLOWNESS {
            send_message(
                &ev.sender,
                &messages,
                "error-negative-slowness",
                &[("slowness", ev.command.slowness.to_string())],
                &mut evw_send_message,
            );
            continue;
        }

        evw_start.write(StartCameraTravelEvent {
            player: entity,
            movements: build_movements(recorded),
            slowness: ev.command.slowness,
        });
    }
}

pub(super) fn register(app: &mut App) {
    app.add_event::<CommandEvent<StartCommand>>().add_systems(
        Update,
        (parse_command::<StartCommand>, handle_start_command)
            .chain()
            .in_set(CameramanSet::Commands),
    );
}

#[cfg(test)]
mod tests {
    use crate::commands::{ArgumentError, CameramanCommandSent, CameramanCommandType, CommandSender};

    use super::StartCommand;

    #[test]
    fn parses_a_numeric_slowness() {
        let ev = CameramanCommandSent::new("start 2.5", CommandSender::Console);
        assert_eq!(StartCommand::from_input(&ev).unwrap().slowness, 2.5);
    }

    #[test]
    fn rejects_missing_or_malformed_slowness() {
        let missing = CameramanCommandSent::new("start", CommandSender::Console);
        assert_eq!(StartCommand::from_input(&missing).unwrap_err(), ArgumentError::TooFewArguments);

        let malformed = CameramanCommandSent::new("start fast", CommandSender::Console);
        assert_eq!(
            StartCommand::from_input(&malformed).unwrap_err(),
            ArgumentError::InvalidType {
                arg_index: 0,
                type_name: "slowness"
            }
        );
    }
}
