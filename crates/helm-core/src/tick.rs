/// Timing data for one simulation step, handed to every command step.
///
/// The host loop is the only source of time progression; commands never
/// wait, they are simply re-stepped with the next context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
}
