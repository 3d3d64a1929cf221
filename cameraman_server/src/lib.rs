//! Server-side camera travel plugin
//!
//! Lets a player record waypoints with `/cameraman p`, then replays a smooth
//! spectator-mode camera flight through them. Add [`CameramanServerPlugin`]
//! to the server's [`App`](bevy::prelude::App) and wire the boundary:
//!
//! - spawn players with [`Player`](cameraman_core::entities::player::Player),
//!   [`Pose`](cameraman_core::camera::Pose) and
//!   [`GameMode`](cameraman_core::entities::player::gamemode::GameMode)
//!   components, and register loaded worlds in
//!   [`Worlds`](cameraman_core::world::Worlds) during startup;
//! - turn `/cameraman ...` chat input into
//!   [`CameramanCommandSent`](commands::CameramanCommandSent) events, and
//!   decoded movement packets into
//!   [`PlayerMoveRequestEvent`](netty::PlayerMoveRequestEvent)s;
//! - deliver [`SendCommandMessageEvent`](commands::SendCommandMessageEvent)s
//!   as chat and answer
//!   [`ResyncPlayerPositionEvent`](netty::ResyncPlayerPositionEvent)s with an
//!   authoritative position packet;
//! - emit [`PlayerDisconnectedEvent`](netty::PlayerDisconnectedEvent) before
//!   despawning a leaving player.

#![warn(missing_docs)]

pub mod camera;
pub mod commands;
pub mod netty;
pub mod persistence;
pub mod plugin;
pub mod settings;

pub use plugin::cameraman_plugin::CameramanServerPlugin;
