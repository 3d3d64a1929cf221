//! Registry of the worlds the host server has loaded
//!
//! Saved waypoints refer to worlds by name; at runtime everything else deals
//! in copyable [`WorldId`]s interned here. The host registers its worlds
//! during startup, before the waypoint file is loaded.

use std::collections::HashMap;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Identifies a world registered with [`Worlds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldId(u16);

/// All worlds known to the server, keyed both ways (name <-> id).
#[derive(Resource, Debug, Default)]
pub struct Worlds {
    names: Vec<String>,
    ids: HashMap<String, WorldId>,
}

impl Worlds {
    /// Registers a world under the given name, returning its id.
    ///
    /// Registering the same name twice returns the existing id.
    pub fn register(&mut self, name: impl Into<String>) -> WorldId {
        let name = name.into();
        if let Some(id) = self.ids.get(&name) {
            return *id;
        }

        let id = WorldId(self.names.len() as u16);
        self.names.push(name.clone());
        self.ids.insert(name, id);
        id
    }

    /// Looks up a world by its name.
    pub fn from_name(&self, name: &str) -> Option<WorldId> {
        self.ids.get(name).copied()
    }

    /// The name a world was registered under.
    pub fn name_of(&self, id: WorldId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::Worlds;

    #[test]
    fn register_and_resolve() {
        let mut worlds = Worlds::default();
        let overworld = worlds.register("world");
        let nether = worlds.register("nether");

        assert_ne!(overworld, nether);
        assert_eq!(worlds.from_name("world"), Some(overworld));
        assert_eq!(worlds.name_of(nether), Some("nether"));
    }

    #[test]
    fn register_is_idempotent() {
        let mut worlds = Worlds::default();
        let first = worlds.register("world");
        let second = worlds.register("world");

        assert_eq!(first, second);
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        let worlds = Worlds::default();

        assert_eq!(worlds.from_name("gone"), None);
    }
}
