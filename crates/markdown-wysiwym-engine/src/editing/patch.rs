use super::delta::EditDelta;

/// Result of applying one edit to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    pub delta: EditDelta,
    pub version: u64,
}
