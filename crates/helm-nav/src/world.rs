use helm_core::{WorldMut, WorldView};

use crate::{Cell, EntityHit, Vec2};

/// Read-only avatar and tile queries a steering world must expose.
pub trait TileWorldView: WorldView {
    /// Host-defined entity reference returned by cell queries.
    type Entity: Clone;

    fn position(&self, agent: Self::Agent) -> Option<Vec2>;

    /// Radians; 0 faces north, increasing values turn left.
    fn rotation(&self, agent: Self::Agent) -> Option<f32>;

    /// Entities occupying `cell`, appended to `out` in a deterministic
    /// order. The buffer is reused across cells by callers.
    fn entities_at(&self, cell: Cell, out: &mut Vec<EntityHit<Self::Entity>>);
}

/// Write access to the avatar pose and actuators.
///
/// The controller is the sole writer of the two desired-* actuators; the
/// host movement system consumes them.
pub trait TileWorldMut: WorldMut + TileWorldView {
    fn set_position(&mut self, agent: Self::Agent, position: Vec2);

    fn set_rotation(&mut self, agent: Self::Agent, rotation: f32);

    /// Forward drive in `[0, 1]`.
    fn set_desired_speed(&mut self, agent: Self::Agent, speed: f32);

    /// Turn rate in `[-1, 1]`; positive turns left.
    fn set_desired_left_rotation(&mut self, agent: Self::Agent, rate: f32);
}
