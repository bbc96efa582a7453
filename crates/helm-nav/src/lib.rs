//! Tile-world steering primitives and the avatar command facade.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod command;
pub mod commander;
pub mod grid;
pub mod math;
pub mod search;
pub mod steer;
pub mod world;

pub use command::GoalCommand;
pub use commander::{CommandError, Commander, CommanderConfig};
pub use grid::Cell;
pub use math::{angle_difference, bearing, wrap_angle, Vec2};
pub use search::{find_nearest, ring, EntityHit, Placement, Ring};
pub use steer::{goto_step, rotate_step, step, Goal, Pose, Steering};
pub use world::{TileWorldMut, TileWorldView};
