use bevy::prelude::*;
use cameraman_core::messages::Messages;

use super::{CameramanCommand, CameramanCommandSent, CameramanCommands, SendCommandMessageEvent, send_message};
use crate::plugin::cameraman_plugin::CameramanSet;

mod about;
mod clear;
mod help;
mod info;
mod point;
mod start;
mod stop;
mod teleport;

fn register_commands(mut commands: ResMut<CameramanCommands>) {
    commands.add(CameramanCommand {
        verb: "p",
        usage: "[index]",
        description: "Records where you stand as a new waypoint, or overwrites waypoint [index].",
    });

    commands.add(CameramanCommand {
        verb: "start",
        usage: "<slowness>",
        description: "Starts a camera travel along your waypoints; one segment takes <slowness> seconds.",
    });

    commands.add(CameramanCommand {
        verb: "stop",
        usage: "",
        description: "Stops your running camera travel.",
    });

    commands.add(CameramanCommand {
        verb: "info",
        usage: "[index]",
        description: "Shows your waypoints, or just waypoint [index].",
    });

    commands.add(CameramanCommand {
        verb: "goto",
        usage: "<index>",
        description: "Teleports you to waypoint <index>.",
    });

    commands.add(CameramanCommand {
        verb: "clear",
        usage: "[index]",
        description: "Removes all of your waypoints, or just waypoint [index].",
    });

    commands.add(CameramanCommand {
        verb: "help",
        usage: "[verb]",
        description: "Shows every command, or how one verb is used.",
    });

    commands.add(CameramanCommand {
        verb: "about",
        usage: "",
        description: "Tells you about this plugin.",
    });
}

fn handle_unknown_commands(
    mut evr_command: EventReader<CameramanCommandSent>,
    commands: Res<CameramanCommands>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
) {
    for ev in evr_command.read() {
        if commands.get(&ev.verb).is_some() {
            continue;
        }

        if ev.verb.is_empty() {
            // bare "/cameraman"
            help::send_help_pages(&ev.sender, None, &commands, &messages, &mut evw_send_message);
        } else {
            send_message(&ev.sender, &messages, "error-unknown-command", &[], &mut evw_send_message);
        }
    }
}

pub(super) fn register(app: &mut App) {
    app.add_systems(Startup, register_commands);
    app.add_systems(Update, handle_unknown_commands.in_set(CameramanSet::Commands));

    about::register(app);
    clear::register(app);
    help::register(app);
    info::register(app);
    point::register(app);
    start::register(app);
    stop::register(app);
    teleport::register(app);
}
