//! Per-player recorded waypoint lists
//!
//! Lists are keyed by the player's persistent unique id. A player who has
//! never recorded anything has no list at all, which is a different state
//! from holding an empty list - the command layer words its errors
//! accordingly.

use std::collections::HashMap;

use bevy::log::warn;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Pose;
use crate::world::Worlds;

/// Every player's recorded waypoints.
#[derive(Resource, Debug, Default)]
pub struct WaypointMap {
    lists: HashMap<Uuid, Vec<Pose>>,
}

impl WaypointMap {
    /// The waypoints a player has recorded, in recording order.
    ///
    /// `None` means the player has never recorded any; an empty slice means
    /// they had some and cleared them.
    pub fn waypoints(&self, player: Uuid) -> Option<&[Pose]> {
        self.lists.get(&player).map(Vec::as_slice)
    }

    /// Makes sure the player has a (possibly empty) list.
    pub fn ensure(&mut self, player: Uuid) -> &[Pose] {
        self.lists.entry(player).or_default()
    }

    /// Appends a waypoint to the player's list, returning the new length.
    pub fn append(&mut self, player: Uuid, pose: Pose) -> usize {
        let list = self.lists.entry(player).or_default();
        list.push(pose);
        list.len()
    }

    /// Overwrites the waypoint at `index` (0-based).
    ///
    /// The store does no bounds checking - callers validate the index first.
    pub fn set(&mut self, player: Uuid, index: usize, pose: Pose) {
        self.lists.entry(player).or_default()[index] = pose;
    }

    /// Removes the waypoint at `index` (0-based), returning how many remain.
    ///
    /// The store does no bounds checking - callers validate the index first.
    pub fn remove_at(&mut self, player: Uuid, index: usize) -> usize {
        let list = self.lists.entry(player).or_default();
        list.remove(index);
        list.len()
    }

    /// Empties the player's list (the list itself stays, now of length 0).
    pub fn clear(&mut self, player: Uuid) {
        self.lists.insert(player, Vec::new());
    }

    /// Whether no player has a list at all.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Converts the whole map into its on-disk form.
    pub fn to_saved(&self, worlds: &Worlds) -> HashMap<String, Vec<SavedWaypoint>> {
        self.lists
            .iter()
            .map(|(player, list)| {
                (
                    player.to_string(),
                    list.iter().map(|pose| SavedWaypoint::from_pose(pose, worlds)).collect(),
                )
            })
            .collect()
    }

    /// Rebuilds the map from its on-disk form.
    ///
    /// Records keyed by something that is not a uuid are dropped with a
    /// warning; waypoints whose world no longer exists keep their position
    /// but lose the world reference.
    pub fn from_saved(saved: HashMap<String, Vec<SavedWaypoint>>, worlds: &Worlds) -> Self {
        let mut lists = HashMap::new();

        for (key, waypoints) in saved {
            let Ok(player) = Uuid::parse_str(&key) else {
                warn!("Dropping waypoint list under non-uuid key `{key}`");
                continue;
            };

            lists.insert(player, waypoints.into_iter().map(|w| w.into_pose(worlds)).collect());
        }

        Self { lists }
    }
}

/// One waypoint as stored in `waypoint-map.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWaypoint {
    /// X coordinate in blocks
    pub x: f64,
    /// Y coordinate in blocks
    pub y: f64,
    /// Z coordinate in blocks
    pub z: f64,
    /// Look yaw in degrees
    pub yaw: f64,
    /// Look pitch in degrees
    pub pitch: f64,
    /// Name of the world, or `null` when it was already gone at save time
    pub world: Option<String>,
}

impl SavedWaypoint {
    /// Converts a runtime pose into its saved form.
    pub fn from_pose(pose: &Pose, worlds: &Worlds) -> Self {
        Self {
            x: pose.x,
            y: pose.y,
            z: pose.z,
            yaw: pose.yaw,
            pitch: pose.pitch,
            world: pose.world.and_then(|id| worlds.name_of(id)).map(str::to_owned),
        }
    }

    /// Resolves the saved world name and rebuilds the runtime pose.
    pub fn into_pose(self, worlds: &Worlds) -> Pose {
        let world = match &self.world {
            Some(name) => {
                let id = worlds.from_name(name);
                if id.is_none() {
                    warn!("World `{name}` of a saved waypoint no longer exists");
                }
                id
            }
            None => None,
        };

        Pose::new(self.x, self.y, self.z, self.yaw, self.pitch, world)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::camera::Pose;
    use crate::world::Worlds;

    use super::{SavedWaypoint, WaypointMap};

    fn at(x: f64) -> Pose {
        Pose::new(x, 64.0, 0.0, 0.0, 0.0, None)
    }

    #[test]
    fn absent_and_empty_lists_are_distinct() {
        let mut map = WaypointMap::default();
        let player = Uuid::new_v4();

        assert!(map.waypoints(player).is_none());

        map.ensure(player);
        assert_eq!(map.waypoints(player), Some(&[][..]));
    }

    #[test]
    fn append_set_remove() {
        let mut map = WaypointMap::default();
        let player = Uuid::new_v4();

        assert_eq!(map.append(player, at(1.0)), 1);
        assert_eq!(map.append(player, at(2.0)), 2);

        map.set(player, 0, at(9.0));
        assert_eq!(map.waypoints(player).unwrap()[0], at(9.0));

        assert_eq!(map.remove_at(player, 0), 1);
        assert_eq!(map.waypoints(player), Some(&[at(2.0)][..]));
    }

    #[test]
    fn clear_keeps_the_list_present() {
        let mut map = WaypointMap::default();
        let player = Uuid::new_v4();

        map.append(player, at(1.0));
        map.clear(player);

        assert_eq!(map.waypoints(player), Some(&[][..]));
    }

    #[test]
    fn saving_and_loading_round_trips() {
        let mut worlds = Worlds::default();
        let overworld = worlds.register("world");

        let mut map = WaypointMap::default();
        let player = Uuid::new_v4();
        map.append(player, Pose::new(1.0, 2.0, 3.0, 90.0, -10.0, Some(overworld)));

        let reloaded = WaypointMap::from_saved(map.to_saved(&worlds), &worlds);

        assert_eq!(reloaded.waypoints(player), map.waypoints(player));
    }

    #[test]
    fn a_gone_world_degrades_to_no_reference() {
        let worlds = Worlds::default();

        let saved = SavedWaypoint {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            yaw: 0.0,
            pitch: 0.0,
            world: Some("deleted".to_owned()),
        };

        let pose = saved.into_pose(&worlds);
        assert_eq!(pose.world, None);
        assert_eq!(pose.x, 1.0);
    }

    #[test]
    fn non_uuid_keys_are_dropped_on_load() {
        let worlds = Worlds::default();
        let saved = std::collections::HashMap::from([(
            "Notch".to_owned(),
            vec![SavedWaypoint {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                yaw: 0.0,
                pitch: 0.0,
                world: None,
            }],
        )]);

        let map = WaypointMap::from_saved(saved, &worlds);
        assert!(map.is_empty());
    }
}
