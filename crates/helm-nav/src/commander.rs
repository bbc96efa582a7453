use std::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use helm_core::{AgentId, CommandKey, CommandOutcome, CommandRuntime, TickContext};

use crate::{find_nearest, steer, Cell, EntityHit, Goal, GoalCommand, TileWorldMut, Vec2};

/// Facade tunables. The defaults suit unit-tile worlds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CommanderConfig {
    /// Maximum Chebyshev radius scanned when resolving named targets.
    pub max_search_radius: i32,
    /// Arrival distance for absolute and named goto commands.
    pub arrival_distance: f32,
    /// Arrival distance for relative goto commands.
    pub relative_arrival_distance: f32,
    /// Angular tolerance for rotation commands.
    pub rotate_precision: f32,
}

impl Default for CommanderConfig {
    fn default() -> Self {
        Self {
            max_search_radius: 20,
            arrival_distance: 0.1,
            relative_arrival_distance: 0.01,
            rotate_precision: steer::DEFAULT_ROTATE_PRECISION,
        }
    }
}

/// Rejected command input. Surfaced synchronously; the operation has no
/// effect on the runtime or the world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("distance must be positive (got {0})")]
    NonPositiveDistance(f32),
    #[error("precision must be positive (got {0})")]
    NonPositivePrecision(f32),
    #[error("unrecognized compass direction {0:?}")]
    UnknownDirection(String),
}

/// The public command surface for one avatar.
///
/// Continuous commands (goto/rotate) register a goal with the runtime and
/// return immediately; the host drives them by calling
/// [`Commander::advance`] once per simulation tick. Instantaneous commands
/// (teleport, queries) touch the world directly and never the runtime.
pub struct Commander<W>
where
    W: TileWorldMut + 'static,
{
    agent: W::Agent,
    config: CommanderConfig,
    runtime: CommandRuntime<W>,
}

impl<W> Commander<W>
where
    W: TileWorldMut + 'static,
{
    pub fn new(agent: W::Agent) -> Self {
        Self::with_config(agent, CommanderConfig::default())
    }

    pub fn with_config(agent: W::Agent, config: CommanderConfig) -> Self {
        Self {
            agent,
            config,
            runtime: CommandRuntime::default(),
        }
    }

    pub fn agent(&self) -> W::Agent {
        self.agent
    }

    pub fn config(&self) -> CommanderConfig {
        self.config
    }

    pub fn is_idle(&self) -> bool {
        self.runtime.is_idle()
    }

    pub fn active_command(&self) -> Option<CommandKey> {
        self.runtime.current_key()
    }

    /// Drive the active command by one tick. The host calls this exactly
    /// once per simulation step; while idle it is a no-op.
    pub fn advance(&mut self, ctx: &TickContext, world: &mut W) -> Option<CommandOutcome> {
        let outcome = self.runtime.advance(ctx, self.agent, world);
        if let Some(outcome) = outcome {
            tracing::debug!(
                agent = self.agent.stable_id(),
                tick = ctx.tick,
                outcome = ?outcome,
                "command finished"
            );
        }
        outcome
    }

    /// Explicitly stop the active command, if any.
    pub fn cancel(&mut self, ctx: &TickContext, world: &mut W) {
        self.runtime.cancel_current(ctx, self.agent, world);
    }

    fn submit(&mut self, goal: Goal, ctx: &TickContext, world: &mut W) {
        let agent = self.agent.stable_id();
        if let Some(previous) = self.runtime.current_key() {
            tracing::debug!(agent, previous = previous.0, "active command pre-empted");
        }
        tracing::debug!(agent, goal = ?goal, "command submitted");
        self.runtime
            .submit(goal.key(), Box::new(GoalCommand::new(goal)), ctx, self.agent, world);
    }

    /// Steer to an absolute position, arriving within the configured
    /// default distance.
    pub fn goto(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        target: Vec2,
    ) -> Result<(), CommandError> {
        self.goto_within(ctx, world, target, self.config.arrival_distance)
    }

    pub fn goto_within(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        target: Vec2,
        min_distance: f32,
    ) -> Result<(), CommandError> {
        if min_distance <= 0.0 {
            return Err(CommandError::NonPositiveDistance(min_distance));
        }
        self.submit(
            Goal::MoveTo {
                target,
                arrival_distance: min_distance,
            },
            ctx,
            world,
        );
        Ok(())
    }

    /// Steer to an integer cell, aiming at its center.
    pub fn goto_cell(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        cell: Cell,
    ) -> Result<(), CommandError> {
        self.goto_within(ctx, world, cell.center(), self.config.arrival_distance)
    }

    /// Steer to the nearest entity of `kind`; a failed search is a no-op,
    /// not an error.
    pub fn goto_nearest(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        kind: &str,
    ) -> Result<(), CommandError> {
        self.goto_nearest_within(ctx, world, kind, self.config.arrival_distance)
    }

    pub fn goto_nearest_within(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        kind: &str,
        min_distance: f32,
    ) -> Result<(), CommandError> {
        if min_distance <= 0.0 {
            return Err(CommandError::NonPositiveDistance(min_distance));
        }
        let Some(hit) = self.nearest(world, kind) else {
            tracing::debug!(kind, "no nearby entity of requested kind");
            return Ok(());
        };
        self.submit(
            Goal::MoveTo {
                target: hit.target(),
                arrival_distance: min_distance,
            },
            ctx,
            world,
        );
        Ok(())
    }

    /// Steer to an offset from the current position, snapshotted at call
    /// time (the target is not re-evaluated per tick).
    pub fn goto_relative(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        offset: Vec2,
    ) -> Result<(), CommandError> {
        self.goto_relative_within(ctx, world, offset, self.config.relative_arrival_distance)
    }

    pub fn goto_relative_within(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        offset: Vec2,
        min_distance: f32,
    ) -> Result<(), CommandError> {
        if min_distance <= 0.0 {
            return Err(CommandError::NonPositiveDistance(min_distance));
        }
        let Some(position) = world.position(self.agent) else {
            tracing::warn!("avatar has no position; relative goto dropped");
            return Ok(());
        };
        self.submit(
            Goal::MoveTo {
                target: position + offset,
                arrival_distance: min_distance,
            },
            ctx,
            world,
        );
        Ok(())
    }

    /// Rotate to an absolute angle within the configured default precision.
    pub fn rotate_to(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        target: f32,
    ) -> Result<(), CommandError> {
        self.rotate_to_within(ctx, world, target, self.config.rotate_precision)
    }

    pub fn rotate_to_within(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        target: f32,
        precision: f32,
    ) -> Result<(), CommandError> {
        if precision <= 0.0 {
            return Err(CommandError::NonPositivePrecision(precision));
        }
        self.submit(Goal::RotateTo { target, precision }, ctx, world);
        Ok(())
    }

    /// Rotate to the compass direction named by the first letter of
    /// `heading` (n/s/e/w, case-insensitive).
    pub fn set_heading(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        heading: &str,
    ) -> Result<(), CommandError> {
        let target = match heading.trim().to_lowercase().chars().next() {
            Some('n') => 0.0,
            Some('w') => PI / 2.0,
            Some('s') => PI,
            Some('e') => -PI / 2.0,
            _ => return Err(CommandError::UnknownDirection(heading.to_string())),
        };
        self.rotate_to(ctx, world, target)
    }

    /// Rotate to a compass heading in degrees, measured clockwise from
    /// north.
    pub fn set_heading_degrees(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        degrees: f32,
    ) -> Result<(), CommandError> {
        self.rotate_to(ctx, world, -degrees.to_radians())
    }

    /// Instantaneous reposition. The runtime is left untouched: an active
    /// goal keeps steering from the new position.
    pub fn teleport(&mut self, world: &mut W, position: Vec2) {
        world.set_position(self.agent, position);
    }

    pub fn teleport_relative(&mut self, world: &mut W, offset: Vec2) {
        let Some(position) = world.position(self.agent) else {
            tracing::warn!("avatar has no position; relative teleport dropped");
            return;
        };
        world.set_position(self.agent, position + offset);
    }

    /// Nearest entity of `kind` from the avatar's position. Read-only; the
    /// runtime is not involved.
    pub fn nearest(&self, world: &W, kind: &str) -> Option<EntityHit<W::Entity>> {
        let origin = world.position(self.agent)?;
        self.nearest_from(world, kind, origin)
    }

    pub fn nearest_from(
        &self,
        world: &W,
        kind: &str,
        origin: Vec2,
    ) -> Option<EntityHit<W::Entity>> {
        find_nearest(world, origin, self.config.max_search_radius, |hit| {
            hit.kind == kind
        })
    }
}
