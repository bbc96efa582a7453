use crate::AgentId;

/// Read-only world access.
///
/// The kernel does not prescribe which queries a world must expose; subsystem
/// crates (steering, search) define extension traits on top of this marker.
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}
