use helm_core::{Command, CommandKey, CommandStatus, TickContext};

use crate::{steer, Goal, Pose, TileWorldMut};

impl Goal {
    /// Runtime key for this goal kind.
    pub fn key(&self) -> CommandKey {
        match self {
            Goal::MoveTo { .. } => CommandKey("move_to"),
            Goal::RotateTo { .. } => CommandKey("rotate_to"),
        }
    }
}

/// Bridges a steering [`Goal`] to the kernel command runtime.
///
/// Reads the agent pose, runs the pure step function, and writes whichever
/// actuators the controller produced this tick. A missing pose is a
/// `Failure`, never a panic.
#[derive(Debug, Clone, Copy)]
pub struct GoalCommand {
    goal: Goal,
}

impl GoalCommand {
    pub fn new(goal: Goal) -> Self {
        Self { goal }
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }
}

impl<W> Command<W> for GoalCommand
where
    W: TileWorldMut + 'static,
{
    fn step(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) -> CommandStatus {
        let (Some(position), Some(rotation)) = (world.position(agent), world.rotation(agent))
        else {
            return CommandStatus::Failure;
        };

        let (steering, done) = steer::step(Pose { position, rotation }, self.goal);
        if let Some(rate) = steering.desired_left_rotation {
            world.set_desired_left_rotation(agent, rate);
        }
        if let Some(speed) = steering.desired_speed {
            world.set_desired_speed(agent, speed);
        }

        if done {
            CommandStatus::Success
        } else {
            CommandStatus::Running
        }
    }

    fn cancel(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        // A pre-empted or cancelled goal must not leave the avatar driving.
        world.set_desired_speed(agent, 0.0);
        world.set_desired_left_rotation(agent, 0.0);
    }
}
