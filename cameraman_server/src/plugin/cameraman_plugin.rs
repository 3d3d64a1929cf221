//! Wires every module of the plugin into the host's [`App`]

use std::path::PathBuf;

use bevy::prelude::*;
use cameraman_core::world::Worlds;

use crate::settings::CameramanSettings;
use crate::{camera, commands, netty, persistence};

/// Update-schedule ordering for this plugin's systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameramanSet {
    /// Inbound host events (movement packets)
    HostInput,
    /// Command parsing and handlers
    Commands,
    /// Camera session lifecycle and ticking
    Camera,
}

/// The server-side cameraman plugin.
#[derive(Default)]
pub struct CameramanServerPlugin {
    /// Overrides the directory the plugin keeps its files in.
    pub data_folder: Option<PathBuf>,
}

impl Plugin for CameramanServerPlugin {
    fn build(&self, app: &mut App) {
        let settings = match &self.data_folder {
            Some(folder) => CameramanSettings {
                data_folder: folder.clone(),
            },
            None => CameramanSettings::default(),
        };

        app.insert_resource(settings);
        app.init_resource::<Worlds>();

        app.configure_sets(
            Update,
            (CameramanSet::HostInput, CameramanSet::Commands, CameramanSet::Camera).chain(),
        );

        commands::register(app);
        camera::register(app);
        netty::register(app);
        persistence::register(app);
    }
}
