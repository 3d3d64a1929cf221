//! Performs regular autosaves of the waypoint map

use std::time::Duration;

use bevy::{prelude::*, time::common_conditions::on_timer};
use cameraman_core::waypoints::WaypointMap;

use super::SaveWaypointsEvent;

const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(15 * 60);

fn trigger_autosave(mut evw_save: EventWriter<SaveWaypointsEvent>, waypoints: Res<WaypointMap>) {
    if waypoints.is_empty() {
        return;
    }

    info!("Triggering waypoint autosave");
    evw_save.write(SaveWaypointsEvent);
}

pub(super) fn register(app: &mut App) {
    app.add_systems(Last, trigger_autosave.run_if(on_timer(AUTOSAVE_INTERVAL)));
}
