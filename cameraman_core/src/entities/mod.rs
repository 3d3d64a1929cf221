//! Components for the entities this plugin touches

pub mod player;
