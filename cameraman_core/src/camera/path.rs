//! Turning waypoint lists into travel paths and stepping through them

use super::TICKS_PER_SECOND;
use super::movement::Movement;
use super::pose::Pose;

/// Builds the movement sequence for a list of recorded waypoints.
///
/// Consecutive waypoints standing at the same position produce no segment,
/// and the next segment starts from the last *distinct* waypoint. The result
/// is empty when fewer than two distinct positions exist - callers enforce
/// the two-raw-waypoints minimum before starting a travel.
pub fn build_movements(waypoints: &[Pose]) -> Vec<Movement> {
    let mut movements = Vec::new();

    let mut last: Option<&Pose> = None;
    for waypoint in waypoints {
        match last {
            None => last = Some(waypoint),
            Some(previous) => {
                if !waypoint.same_position(previous) {
                    movements.push(Movement::new(*previous, *waypoint));
                    last = Some(waypoint);
                }
            }
        }
    }

    movements
}

/// What a single stepper tick produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TravelStep {
    /// The camera should move to this pose.
    Pose(Pose),
    /// The sequence is exhausted; the travel is over.
    Finished,
}

/// A cursor walking a movement sequence one tick at a time.
///
/// Each [`advance`](Self::advance) moves `1 / (TICKS_PER_SECOND * slowness)`
/// of a segment, so a slowness of `s` traverses one segment in `s` seconds.
/// Overshoot past a segment's end carries into the next segment.
#[derive(Debug, Clone)]
pub struct TravelPath {
    movements: Vec<Movement>,
    slowness: f64,
    cursor: usize,
    progress: f64,
}

impl TravelPath {
    /// Creates a path over `movements`.
    ///
    /// `slowness` is the number of seconds one segment takes and must be
    /// positive - the command boundary rejects anything below
    /// [`MIN_SLOWNESS`](super::MIN_SLOWNESS) before a path is built.
    pub fn new(movements: Vec<Movement>, slowness: f64) -> Self {
        Self {
            movements,
            slowness,
            cursor: 0,
            progress: 0.0,
        }
    }

    /// The movements this path walks.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Seconds one segment takes.
    pub fn slowness(&self) -> f64 {
        self.slowness
    }

    /// Progress gained per tick, in segments.
    pub fn increment(&self) -> f64 {
        1.0 / (f64::from(TICKS_PER_SECOND) * self.slowness)
    }

    /// Steps one tick forward and reports where the camera now stands.
    ///
    /// Once [`TravelStep::Finished`] is returned, further calls keep
    /// returning it.
    pub fn advance(&mut self) -> TravelStep {
        self.progress += self.increment();
        while self.progress >= 1.0 {
            self.progress -= 1.0;
            self.cursor += 1;
        }

        match self.movements.get(self.cursor) {
            Some(movement) => TravelStep::Pose(movement.interpolate(self.progress)),
            None => TravelStep::Finished,
        }
    }
}
