use std::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{angle_difference, bearing, wrap_angle, Vec2};

/// Default angular tolerance for rotation goals.
pub const DEFAULT_ROTATE_PRECISION: f32 = PI / 160.0;

/// Coarse tolerance for the heading correction inside a move goal.
const MOVE_HEADING_PRECISION: f32 = PI / 16.0;

/// Half-angle of the cone within which forward drive is applied.
const DRIVE_CONE: f32 = PI / 5.0;

/// Inside this range the approach speed ramps down linearly.
const CREEP_RANGE: f32 = 1.0;
const CREEP_GAIN: f32 = 0.3;

/// Agent pose snapshot handed to the pure step functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub rotation: f32,
}

/// A pending continuous command: target plus tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Goal {
    MoveTo {
        target: Vec2,
        arrival_distance: f32,
    },
    RotateTo {
        target: f32,
        precision: f32,
    },
}

/// One tick's actuator corrections. `None` leaves that actuator untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Steering {
    pub desired_speed: Option<f32>,
    pub desired_left_rotation: Option<f32>,
}

/// Advance `goal` by one tick against `pose`.
///
/// Returns the actuator corrections and whether the goal is satisfied.
/// Tolerances must be positive; the facade validates them before a goal
/// ever reaches this point.
pub fn step(pose: Pose, goal: Goal) -> (Steering, bool) {
    match goal {
        Goal::MoveTo {
            target,
            arrival_distance,
        } => goto_step(pose, target, arrival_distance),
        Goal::RotateTo { target, precision } => rotate_step(pose.rotation, target, precision),
    }
}

/// One rotation correction toward `target`.
///
/// Square-root law: aggressive far from the target, gentle near it. The
/// turn direction comes from the wrapped difference and the magnitude from
/// the raw one; a target exactly half a turn away turns left.
pub fn rotate_step(rotation: f32, target: f32, precision: f32) -> (Steering, bool) {
    let diff = angle_difference(rotation, target);
    let abs_diff = diff.abs();
    if abs_diff < precision {
        let halt = Steering {
            desired_left_rotation: Some(0.0),
            desired_speed: None,
        };
        return (halt, true);
    }

    let rate = if wrap_angle(diff) < 0.0 {
        (-abs_diff.sqrt()).max(-1.0)
    } else {
        abs_diff.sqrt().min(1.0)
    };
    let steering = Steering {
        desired_left_rotation: Some(rate),
        desired_speed: None,
    };
    (steering, false)
}

/// One approach correction toward `target`.
///
/// Rotate-first policy: the heading is corrected every tick, forward drive
/// only while the heading error lies strictly inside the drive cone. Beyond
/// `CREEP_RANGE` the drive is full; inside it the speed ramps down linearly
/// with distance so the avatar does not overshoot the goal.
pub fn goto_step(pose: Pose, target: Vec2, arrival_distance: f32) -> (Steering, bool) {
    let distance = pose.position.distance(target);
    if distance <= arrival_distance {
        return (Steering::default(), true);
    }

    let target_rotation = -bearing(pose.position, target);
    let (mut steering, _) = rotate_step(pose.rotation, target_rotation, MOVE_HEADING_PRECISION);

    let heading_error = wrap_angle(target_rotation - pose.rotation);
    if -DRIVE_CONE < heading_error && heading_error < DRIVE_CONE {
        let speed = if distance > CREEP_RANGE {
            1.0
        } else {
            distance * CREEP_GAIN
        };
        steering.desired_speed = Some(speed);
    }
    (steering, false)
}
