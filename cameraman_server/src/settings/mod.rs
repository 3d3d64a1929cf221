//! Settings for the plugin

use std::path::PathBuf;

use bevy::prelude::Resource;

/// Where the plugin keeps its files.
#[derive(Resource, Debug, Clone)]
pub struct CameramanSettings {
    /// Directory holding `waypoint-map.json` and `messages.yml`.
    pub data_folder: PathBuf,
}

impl Default for CameramanSettings {
    fn default() -> Self {
        Self {
            data_folder: PathBuf::from("plugin_data/cameraman"),
        }
    }
}

impl CameramanSettings {
    /// Path of the persisted waypoint map.
    pub fn waypoint_file(&self) -> PathBuf {
        self.data_folder.join("waypoint-map.json")
    }

    /// Path of the message catalog.
    pub fn message_file(&self) -> PathBuf {
        self.data_folder.join("messages.yml")
    }
}
