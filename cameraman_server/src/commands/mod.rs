//! Registration & dispatch of the `/cameraman` chat command
//!
//! The host turns `/cameraman ...` input into [`CameramanCommandSent`]
//! events. Each verb lives in its own file under `impls`, declares a typed
//! struct implementing [`CameramanCommandType`], and gets its events from a
//! shared parse system, which sends usage help back on malformed input.

mod impls;

use bevy::prelude::*;
use cameraman_core::messages::Messages;
use thiserror::Error;

/// The entity or console that sent a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSender {
    /// The server console sent this command
    Console,
    /// A player sent this command
    Player(Entity),
}

/// Sends output from a command to the player entity.
#[derive(Event, Debug)]
pub struct SendCommandMessageEvent {
    /// Who the message goes to
    pub to: Entity,
    /// The rendered chat line
    pub message: String,
}

impl CommandSender {
    /// The player entity behind this sender, if any.
    pub fn entity(&self) -> Option<Entity> {
        match self {
            Self::Player(entity) => Some(*entity),
            Self::Console => None,
        }
    }

    /// Sends a raw line to this sender.
    ///
    /// Player - delivered as chat; Console - logged to the server console.
    pub fn send(&self, message: impl Into<String>, evw_send_message: &mut EventWriter<SendCommandMessageEvent>) {
        match self {
            Self::Player(entity) => {
                evw_send_message.write(SendCommandMessageEvent {
                    to: *entity,
                    message: message.into(),
                });
            }
            Self::Console => {
                info!("{}", message.into());
            }
        }
    }
}

/// This event is sent when someone runs the `/cameraman` command.
#[derive(Event, Debug)]
pub struct CameramanCommandSent {
    /// The sender of this command
    pub sender: CommandSender,
    /// Everything the user typed after `/cameraman`
    pub text: String,
    /// The first word, lowercased - selects the subcommand
    pub verb: String,
    /// The remaining words
    pub args: Vec<String>,
}

impl CameramanCommandSent {
    /// Creates a new command event.
    ///
    /// * `text` - everything after `/cameraman` (verb and arguments)
    pub fn new(text: impl Into<String>, sender: CommandSender) -> Self {
        let text = text.into();

        let mut words = text.split(' ').filter(|word| !word.is_empty());
        let verb = words.next().unwrap_or_default().to_lowercase();
        let args = words.map(str::to_owned).collect();

        Self {
            sender,
            text,
            verb,
            args,
        }
    }
}

/// Information that describes how a subcommand should be formatted by the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameramanCommand {
    /// The verb that invokes this subcommand, e.g. `"start"`
    pub verb: &'static str,
    /// How to use the command, without the verb. Example: `"<slowness>"`
    pub usage: &'static str,
    /// What the command does
    pub description: &'static str,
}

/// Every registered subcommand, in help-page order.
#[derive(Resource, Debug, Default)]
pub struct CameramanCommands {
    commands: Vec<CameramanCommand>,
}

impl CameramanCommands {
    /// Registers a subcommand's help info.
    pub fn add(&mut self, command: CameramanCommand) {
        self.commands.push(command);
    }

    /// Finds a subcommand by its verb.
    pub fn get(&self, verb: &str) -> Option<&CameramanCommand> {
        self.commands.iter().find(|command| command.verb == verb)
    }

    /// All subcommands, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CameramanCommand> {
        self.commands.iter()
    }
}

/// Why a subcommand could not be built from the typed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// Not enough arguments were given
    #[error("too few arguments")]
    TooFewArguments,
    /// Too many arguments were given
    #[error("too many arguments")]
    TooManyArguments,
    /// An argument could not be parsed as the type the verb expects
    #[error("argument {arg_index} is not a valid {type_name}")]
    InvalidType {
        /// 0-based position of the offending argument
        arg_index: usize,
        /// Human name of the expected type
        type_name: &'static str,
    },
}

/// A typed `/cameraman` subcommand.
pub trait CameramanCommandType: Sized + Send + Sync + 'static {
    /// The verb that selects this subcommand.
    const VERB: &'static str;

    /// Builds the typed command from the raw input.
    fn from_input(ev: &CameramanCommandSent) -> Result<Self, ArgumentError>;
}

/// A successfully parsed subcommand, ready for its handler system.
#[derive(Event, Debug)]
pub struct CommandEvent<T: CameramanCommandType> {
    /// Who ran the command
    pub sender: CommandSender,
    /// The parsed arguments
    pub command: T,
}

/// Routes raw [`CameramanCommandSent`] events to `T`'s [`CommandEvent`],
/// answering malformed input with the verb's usage line.
pub(crate) fn parse_command<T: CameramanCommandType>(
    mut evr_command: EventReader<CameramanCommandSent>,
    mut evw_parsed: EventWriter<CommandEvent<T>>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
    commands: Res<CameramanCommands>,
    messages: Res<Messages>,
) {
    for ev in evr_command.read() {
        if ev.verb != T::VERB {
            continue;
        }

        match T::from_input(ev) {
            Ok(command) => {
                evw_parsed.write(CommandEvent {
                    sender: ev.sender,
                    command,
                });
            }
            Err(error) => {
                let usage = commands
                    .get(T::VERB)
                    .map(|info| format!("/cameraman {} {}", info.verb, info.usage))
                    .unwrap_or_default();
                send_prefixed(
                    &ev.sender,
                    &messages,
                    format!("{error}. Usage: {usage}"),
                    &mut evw_send_message,
                );
            }
        }
    }
}

/// Renders a catalog message and sends it with the chat prefix.
///
/// An absent key sends nothing, per the catalog contract.
pub(crate) fn send_message(
    sender: &CommandSender,
    messages: &Messages,
    key: &str,
    substitutions: &[(&str, String)],
    evw_send_message: &mut EventWriter<SendCommandMessageEvent>,
) {
    let Some(body) = messages.get(key, substitutions, None) else {
        return;
    };

    send_prefixed(sender, messages, body, evw_send_message);
}

pub(crate) fn send_prefixed(
    sender: &CommandSender,
    messages: &Messages,
    body: impl Into<String>,
    evw_send_message: &mut EventWriter<SendCommandMessageEvent>,
) {
    let prefix = messages.get("prefix", &[], None).unwrap_or_default();
    sender.send(format!("{prefix}{}", body.into()), evw_send_message);
}

/// Rejects a user-facing index outside `1..=total`, reporting the total.
///
/// Returns `true` when the index was rejected (and the error already sent).
pub(crate) fn check_index(
    index: usize,
    total: usize,
    sender: &CommandSender,
    messages: &Messages,
    evw_send_message: &mut EventWriter<SendCommandMessageEvent>,
) -> bool {
    if index < 1 || index > total {
        send_message(
            sender,
            messages,
            "error-index-out-of-bounds",
            &[("total", total.to_string())],
            evw_send_message,
        );
        return true;
    }

    false
}

pub(super) fn register(app: &mut App) {
    app.init_resource::<CameramanCommands>();
    app.add_event::<CameramanCommandSent>().add_event::<SendCommandMessageEvent>();

    impls::register(app);
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use cameraman_core::camera::Pose;
    use cameraman_core::entities::player::{Player, gamemode::GameMode};
    use cameraman_core::messages::Messages;
    use cameraman_core::waypoints::WaypointMap;
    use cameraman_core::world::Worlds;
    use uuid::Uuid;

    use crate::camera::{self, CameraSession};
    use crate::netty::{PlayerDisconnectedEvent, ResyncPlayerPositionEvent};
    use crate::plugin::cameraman_plugin::CameramanSet;

    use super::{CameramanCommandSent, CommandSender, SendCommandMessageEvent, register};

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.init_resource::<Messages>();
        app.init_resource::<WaypointMap>();
        app.init_resource::<Worlds>();
        app.add_event::<PlayerDisconnectedEvent>();
        app.add_event::<ResyncPlayerPositionEvent>();
        app.configure_sets(Update, (CameramanSet::Commands, CameramanSet::Camera).chain());

        register(&mut app);
        camera::register(&mut app);
        app
    }

    fn spawn_player(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                Player::new("Steve", Uuid::new_v4()),
                Pose::new(0.0, 64.0, 0.0, 0.0, 0.0, None),
                GameMode::Survival,
            ))
            .id()
    }

    fn run_command(app: &mut App, sender: CommandSender, text: &str) -> Vec<String> {
        app.world_mut().send_event(CameramanCommandSent::new(text, sender));
        app.update();

        app.world_mut()
            .resource_mut::<Events<SendCommandMessageEvent>>()
            .drain()
            .map(|ev| ev.message)
            .collect()
    }

    fn set_x(app: &mut App, player: Entity, x: f64) {
        app.world_mut().get_mut::<Pose>(player).unwrap().x = x;
    }

    #[test]
    fn the_raw_event_splits_verb_and_args() {
        let ev = CameramanCommandSent::new("START  2.5 ", CommandSender::Console);

        assert_eq!(ev.verb, "start");
        assert_eq!(ev.args, vec!["2.5".to_owned()]);
    }

    #[test]
    fn recording_and_listing_waypoints() {
        let mut app = test_app();
        let player = spawn_player(&mut app);
        let sender = CommandSender::Player(player);

        let replies = run_command(&mut app, sender, "p");
        assert!(replies.iter().any(|m| m.contains("Added waypoint #1")));

        set_x(&mut app, player, 10.0);
        let replies = run_command(&mut app, sender, "p");
        assert!(replies.iter().any(|m| m.contains("Added waypoint #2")));

        let replies = run_command(&mut app, sender, "info");
        assert_eq!(replies.len(), 2);
        assert!(replies[0].contains("#1"));
        assert!(replies[1].contains("#2"));
    }

    #[test]
    fn overwriting_a_waypoint_in_place() {
        let mut app = test_app();
        let player = spawn_player(&mut app);
        let sender = CommandSender::Player(player);

        run_command(&mut app, sender, "p");
        run_command(&mut app, sender, "p");

        set_x(&mut app, player, 42.0);
        let replies = run_command(&mut app, sender, "p 1");
        assert!(replies.iter().any(|m| m.contains("Replaced waypoint #1")));

        let waypoints = app.world().resource::<WaypointMap>();
        let player_id = app.world().get::<Player>(player).unwrap().id();
        assert_eq!(waypoints.waypoints(player_id).unwrap()[0].x, 42.0);
    }

    #[test]
    fn start_validates_in_order() {
        let mut app = test_app();
        let player = spawn_player(&mut app);
        let sender = CommandSender::Player(player);

        // missing and malformed arguments answer with the usage line
        let replies = run_command(&mut app, sender, "start");
        assert!(replies.iter().any(|m| m.contains("Usage: /cameraman start")));
        let replies = run_command(&mut app, sender, "start fast");
        assert!(replies.iter().any(|m| m.contains("Usage: /cameraman start")));

        // a single waypoint is not enough
        run_command(&mut app, sender, "p");
        let replies = run_command(&mut app, sender, "start 1");
        assert!(replies.iter().any(|m| m.contains("at least two waypoints")));

        set_x(&mut app, player, 10.0);
        run_command(&mut app, sender, "p");

        // a zero slowness is rejected, naming the value
        let replies = run_command(&mut app, sender, "start 0");
        assert!(replies.iter().any(|m| m.contains("must be positive") && m.contains('0')));
        assert!(app.world().get::<CameraSession>(player).is_none());

        let replies = run_command(&mut app, sender, "start 1");
        assert!(replies.iter().any(|m| m.contains("will start soon")));
        assert!(app.world().get::<CameraSession>(player).is_some());
        assert_eq!(*app.world().get::<GameMode>(player).unwrap(), GameMode::Spectator);
    }

    #[test]
    fn starting_again_supersedes_the_running_travel() {
        let mut app = test_app();
        let player = spawn_player(&mut app);
        let sender = CommandSender::Player(player);

        run_command(&mut app, sender, "p");
        set_x(&mut app, player, 10.0);
        run_command(&mut app, sender, "p");
        set_x(&mut app, player, 0.0);

        run_command(&mut app, sender, "start 1");
        let replies = run_command(&mut app, sender, "start 2");
        assert!(replies.iter().any(|m| m.contains("Interrupting")));
        assert!(app.world().get::<CameraSession>(player).is_some());
    }

    #[test]
    fn index_bounds_accept_the_edges_and_reject_past_them() {
        let mut app = test_app();
        let player = spawn_player(&mut app);
        let sender = CommandSender::Player(player);

        run_command(&mut app, sender, "p");
        set_x(&mut app, player, 10.0);
        run_command(&mut app, sender, "p");

        let replies = run_command(&mut app, sender, "goto 0");
        assert!(replies.iter().any(|m| m.contains("between 1 and 2")));
        let replies = run_command(&mut app, sender, "goto 3");
        assert!(replies.iter().any(|m| m.contains("between 1 and 2")));

        let replies = run_command(&mut app, sender, "goto 1");
        assert!(replies.iter().any(|m| m.contains("Teleported you to waypoint #1")));
        assert_eq!(app.world().get::<Pose>(player).unwrap().x, 0.0);

        let replies = run_command(&mut app, sender, "goto 2");
        assert!(replies.iter().any(|m| m.contains("Teleported you to waypoint #2")));
        assert_eq!(app.world().get::<Pose>(player).unwrap().x, 10.0);
    }

    #[test]
    fn clearing_one_and_all_waypoints() {
        let mut app = test_app();
        let player = spawn_player(&mut app);
        let sender = CommandSender::Player(player);

        let replies = run_command(&mut app, sender, "clear");
        assert!(replies.iter().any(|m| m.contains("no waypoints to remove")));

        run_command(&mut app, sender, "p");
        run_command(&mut app, sender, "p");

        let replies = run_command(&mut app, sender, "clear 1");
        assert!(replies.iter().any(|m| m.contains("Removed waypoint #1") && m.contains("(1 left)")));

        let replies = run_command(&mut app, sender, "clear");
        assert!(replies.iter().any(|m| m.contains("Removed all")));

        let replies = run_command(&mut app, sender, "info");
        assert!(replies.iter().any(|m| m.contains("no waypoints to show")));
    }

    #[test]
    fn stop_without_a_travel_reports_nothing_to_do() {
        let mut app = test_app();
        let player = spawn_player(&mut app);

        let replies = run_command(&mut app, CommandSender::Player(player), "stop");
        assert!(replies.iter().any(|m| m.contains("no travel to interrupt")));
    }

    #[test]
    fn unknown_verbs_and_bare_invocations() {
        let mut app = test_app();
        let player = spawn_player(&mut app);
        let sender = CommandSender::Player(player);

        let replies = run_command(&mut app, sender, "bogus");
        assert!(replies.iter().any(|m| m.contains("Unknown command")));

        // bare "/cameraman" prints the help pages: header plus one line per verb
        let replies = run_command(&mut app, sender, "");
        assert!(replies.iter().any(|m| m.contains("=== Cameraman")));
        assert!(replies.iter().filter(|m| m.starts_with("/cameraman ")).count() >= 8);
    }

    #[test]
    fn the_console_cannot_record_waypoints() {
        let mut app = test_app();
        spawn_player(&mut app);

        run_command(&mut app, CommandSender::Console, "p");
        assert!(app.world().resource::<WaypointMap>().is_empty());
    }
}
