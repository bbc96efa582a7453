use crate::{TickContext, WorldMut};

/// Result of stepping a command for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Running,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    Failure,
}

impl From<CommandOutcome> for CommandStatus {
    fn from(value: CommandOutcome) -> Self {
        match value {
            CommandOutcome::Success => CommandStatus::Success,
            CommandOutcome::Failure => CommandStatus::Failure,
        }
    }
}

impl CommandStatus {
    pub fn outcome(self) -> Option<CommandOutcome> {
        match self {
            CommandStatus::Running => None,
            CommandStatus::Success => Some(CommandOutcome::Success),
            CommandStatus::Failure => Some(CommandOutcome::Failure),
        }
    }
}

/// Names a command kind, for pre-emption bookkeeping and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommandKey(pub &'static str);

/// A deferred command: issued once, then re-stepped by the host every tick
/// until it reports a terminal status.
///
/// Implementations must be total over valid agent states: always return a
/// status, never panic across the runtime boundary.
pub trait Command<W>: 'static
where
    W: WorldMut + 'static,
{
    fn step(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> CommandStatus;

    fn cancel(&mut self, _ctx: &TickContext, _agent: W::Agent, _world: &mut W) {}
}

struct ActiveCommand<W>
where
    W: WorldMut + 'static,
{
    key: CommandKey,
    command: Box<dyn Command<W>>,
}

/// Per-agent deferred command scheduler: `Idle -> Active -> Idle`.
///
/// At most one command is live at a time. Submitting while active cancels
/// the previous command (last-writer-wins, no queue).
pub struct CommandRuntime<W>
where
    W: WorldMut + 'static,
{
    current: Option<ActiveCommand<W>>,
    just_finished: Option<(CommandKey, CommandOutcome)>,
}

impl<W> CommandRuntime<W>
where
    W: WorldMut + 'static,
{
    pub fn current_key(&self) -> Option<CommandKey> {
        self.current.as_ref().map(|c| c.key)
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    pub fn is_running(&self, key: CommandKey) -> bool {
        self.current_key() == Some(key)
    }

    /// Install a new command, pre-empting the active one if any.
    pub fn submit(
        &mut self,
        key: CommandKey,
        command: Box<dyn Command<W>>,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
    ) {
        self.cancel_current(ctx, agent, world);
        self.current = Some(ActiveCommand { key, command });
    }

    /// Explicit stop. Runs the active command's cancel hook, if any.
    pub fn cancel_current(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        if let Some(current) = self.current.as_mut() {
            current.command.cancel(ctx, agent, world);
        }
        self.current = None;
        self.just_finished = None;
    }

    /// Drive the active command by one tick; a no-op while idle.
    ///
    /// The host loop calls this exactly once per simulation step. On a
    /// terminal status the runtime transitions back to idle and the outcome
    /// stays retrievable via [`CommandRuntime::take_just_finished`].
    pub fn advance(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
    ) -> Option<CommandOutcome> {
        let current = self.current.as_mut()?;
        let status = current.command.step(ctx, agent, world);
        let outcome = status.outcome()?;
        let key = current.key;

        self.current = None;
        self.just_finished = Some((key, outcome));
        Some(outcome)
    }

    pub fn take_just_finished(&mut self, key: CommandKey) -> Option<CommandOutcome> {
        match self.just_finished {
            Some((finished_key, outcome)) if finished_key == key => {
                self.just_finished = None;
                Some(outcome)
            }
            _ => None,
        }
    }
}

impl<W> Default for CommandRuntime<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self {
            current: None,
            just_finished: None,
        }
    }
}
