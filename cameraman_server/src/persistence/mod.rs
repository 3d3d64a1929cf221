//! Loading and saving of the plugin's data folder
//!
//! `waypoint-map.json` holds every player's waypoints; `messages.yml` holds
//! the chat templates. Neither file existing is the normal first-boot state.
//! A message file carrying an older version than this build is rewritten in
//! place from the default catalog.

pub mod autosave;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use cameraman_core::messages::{MESSAGE_VERSION, Messages};
use cameraman_core::waypoints::{SavedWaypoint, WaypointMap};
use cameraman_core::world::Worlds;

use crate::settings::CameramanSettings;

/// Send this event to write the waypoint map to disk.
#[derive(Event, Default)]
pub struct SaveWaypointsEvent;

fn read_or_upgrade_messages(path: &Path) -> anyhow::Result<Messages> {
    if path.exists() {
        let messages: Messages = serde_yaml::from_str(&fs::read_to_string(path)?)?;
        if messages.version() >= MESSAGE_VERSION {
            return Ok(messages);
        }

        info!(
            "Message catalog is version {} (expected {MESSAGE_VERSION}) - rewriting it",
            messages.version()
        );
    }

    let messages = Messages::default_catalog();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_yaml::to_string(&messages)?)?;

    Ok(messages)
}

fn load_messages(settings: Res<CameramanSettings>, mut commands: Commands) {
    let messages = match read_or_upgrade_messages(&settings.message_file()) {
        Ok(messages) => messages,
        Err(error) => {
            error!("Failed to load the message catalog: {error}");
            Messages::default_catalog()
        }
    };

    commands.insert_resource(messages);
}

fn read_waypoint_file(path: &Path, worlds: &Worlds) -> anyhow::Result<WaypointMap> {
    if !path.exists() {
        return Ok(WaypointMap::default());
    }

    let saved: HashMap<String, Vec<SavedWaypoint>> = serde_json::from_str(&fs::read_to_string(path)?)?;
    Ok(WaypointMap::from_saved(saved, worlds))
}

fn load_waypoints(settings: Res<CameramanSettings>, worlds: Res<Worlds>, mut commands: Commands) {
    let waypoints = match read_waypoint_file(&settings.waypoint_file(), &worlds) {
        Ok(waypoints) => waypoints,
        Err(error) => {
            error!("Failed to load the waypoint map - starting empty: {error}");
            WaypointMap::default()
        }
    };

    commands.insert_resource(waypoints);
}

fn write_waypoint_file(path: &Path, waypoints: &WaypointMap, worlds: &Worlds) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string_pretty(&waypoints.to_saved(worlds))?)?;
    Ok(())
}

fn save_waypoints(
    waypoints: Res<WaypointMap>,
    worlds: Res<Worlds>,
    settings: Res<CameramanSettings>,
    mut evr_save: EventReader<SaveWaypointsEvent>,
    mut evr_exit: EventReader<AppExit>,
) {
    if evr_save.is_empty() && evr_exit.is_empty() {
        return;
    }
    evr_save.clear();
    evr_exit.clear();

    if let Err(error) = write_waypoint_file(&settings.waypoint_file(), &waypoints, &worlds) {
        error!("Failed to save the waypoint map: {error}");
    }
}

pub(super) fn register(app: &mut App) {
    app.init_resource::<Messages>().init_resource::<WaypointMap>();
    app.add_event::<SaveWaypointsEvent>();

    // PostStartup so the host's own startup systems have registered their
    // worlds by the time saved waypoints are resolved against them.
    app.add_systems(PostStartup, (load_messages, load_waypoints));
    app.add_systems(Last, save_waypoints);

    autosave::register(app);
}
