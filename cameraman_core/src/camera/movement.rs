//! A single straight camera segment

use super::pose::Pose;

/// A directed straight segment between two camera poses.
///
/// [`build_movements`](super::build_movements) never constructs a movement
/// whose endpoints share a position.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    from: Pose,
    to: Pose,
}

impl Movement {
    /// Creates a segment from `from` to `to`.
    pub fn new(from: Pose, to: Pose) -> Self {
        Self { from, to }
    }

    /// The pose this segment starts at.
    pub fn from(&self) -> &Pose {
        &self.from
    }

    /// The pose this segment ends at.
    pub fn to(&self) -> &Pose {
        &self.to
    }

    /// The pose `progress` of the way along this segment.
    ///
    /// Position and look angles are blended linearly. `progress` is clamped
    /// to `[0.0, 1.0]`. The resulting world is the destination's, falling
    /// back to the origin's when the destination world is gone - the
    /// endpoint actually being approached wins.
    pub fn interpolate(&self, progress: f64) -> Pose {
        let t = progress.clamp(0.0, 1.0);
        let lerp = |a: f64, b: f64| a + (b - a) * t;

        Pose {
            x: lerp(self.from.x, self.to.x),
            y: lerp(self.from.y, self.to.y),
            z: lerp(self.from.z, self.to.z),
            yaw: lerp(self.from.yaw, self.to.yaw),
            pitch: lerp(self.from.pitch, self.to.pitch),
            world: self.to.world.or(self.from.world),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::world::Worlds;

    use super::{Movement, Pose};

    fn segment() -> Movement {
        Movement::new(
            Pose::new(0.0, 64.0, 0.0, 0.0, 0.0, None),
            Pose::new(10.0, 70.0, -20.0, 90.0, -30.0, None),
        )
    }

    #[test]
    fn interpolate_zero_is_the_origin() {
        let movement = segment();

        assert_eq!(movement.interpolate(0.0), *movement.from());
    }

    #[test]
    fn interpolate_one_is_the_destination() {
        let movement = segment();

        assert_eq!(movement.interpolate(1.0), *movement.to());
    }

    #[test]
    fn interpolation_is_linear_in_every_component() {
        let half = segment().interpolate(0.5);

        assert_eq!(half.x, 5.0);
        assert_eq!(half.y, 67.0);
        assert_eq!(half.z, -10.0);
        assert_eq!(half.yaw, 45.0);
        assert_eq!(half.pitch, -15.0);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let movement = segment();

        assert_eq!(movement.interpolate(-1.0), *movement.from());
        assert_eq!(movement.interpolate(2.5), *movement.to());
    }

    #[test]
    fn world_prefers_the_destination() {
        let mut worlds = Worlds::default();
        let a = worlds.register("a");
        let b = worlds.register("b");

        let movement = Movement::new(
            Pose::new(0.0, 0.0, 0.0, 0.0, 0.0, Some(a)),
            Pose::new(1.0, 0.0, 0.0, 0.0, 0.0, Some(b)),
        );

        assert_eq!(movement.interpolate(0.1).world, Some(b));
    }

    #[test]
    fn world_falls_back_to_the_origin() {
        let mut worlds = Worlds::default();
        let a = worlds.register("a");

        let movement = Movement::new(
            Pose::new(0.0, 0.0, 0.0, 0.0, 0.0, Some(a)),
            Pose::new(1.0, 0.0, 0.0, 0.0, 0.0, None),
        );

        assert_eq!(movement.interpolate(0.9).world, Some(a));
    }
}
