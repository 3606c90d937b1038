use super::kinds::CodeFence;

/// Scanner state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    #[default]
    Normal,
    InFencedBlock,
}

/// What a line is, given the state it was read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// A fence delimiter line. Never block content.
    Fence,
    /// A line inside a fenced block; no markup matching applies.
    BlockContent,
    /// A line eligible for container and inline matching.
    Markup,
}

impl FenceState {
    /// Pure transition: classifies `line` and returns the state for the next line.
    ///
    /// Any fence delimiter toggles the state, regardless of which fence
    /// character opened the block.
    pub fn step(self, line: &str) -> (FenceState, LineRole) {
        if CodeFence::sig(line).is_some() {
            return (self.toggled(), LineRole::Fence);
        }
        match self {
            FenceState::Normal => (self, LineRole::Markup),
            FenceState::InFencedBlock => (self, LineRole::BlockContent),
        }
    }

    #[must_use]
    pub fn toggled(self) -> FenceState {
        match self {
            FenceState::Normal => FenceState::InFencedBlock,
            FenceState::InFencedBlock => FenceState::Normal,
        }
    }

    /// True when a scan ending in this state left a fence open.
    #[must_use]
    pub fn is_unterminated(self) -> bool {
        self == FenceState::InFencedBlock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fence_opens_block() {
        assert_eq!(
            FenceState::Normal.step("```rust"),
            (FenceState::InFencedBlock, LineRole::Fence)
        );
    }

    #[test]
    fn fence_closes_block() {
        assert_eq!(
            FenceState::InFencedBlock.step("```"),
            (FenceState::Normal, LineRole::Fence)
        );
    }

    #[test]
    fn tilde_fence_closes_backtick_block() {
        assert_eq!(
            FenceState::InFencedBlock.step("~~~"),
            (FenceState::Normal, LineRole::Fence)
        );
    }

    #[test]
    fn lines_inside_block_are_content() {
        assert_eq!(
            FenceState::InFencedBlock.step("# not a heading"),
            (FenceState::InFencedBlock, LineRole::BlockContent)
        );
    }

    #[test]
    fn normal_lines_are_markup() {
        assert_eq!(
            FenceState::Normal.step("plain"),
            (FenceState::Normal, LineRole::Markup)
        );
    }

    #[test]
    fn only_in_block_state_is_unterminated() {
        assert!(FenceState::InFencedBlock.is_unterminated());
        assert!(!FenceState::Normal.is_unterminated());
    }
}
