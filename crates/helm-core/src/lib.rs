//! Deterministic, engine-agnostic command-execution kernel.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod command;
pub mod tick;
pub mod world;

pub use agent::AgentId;
pub use command::{Command, CommandKey, CommandOutcome, CommandRuntime, CommandStatus};
pub use tick::TickContext;
pub use world::{WorldMut, WorldView};
