//! Contains the cameraman server bevy plugin

pub mod cameraman_plugin;
