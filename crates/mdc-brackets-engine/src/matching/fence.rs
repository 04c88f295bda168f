/// Which marker character a fence line uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

/// How fence lines end a fenced region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FenceMode {
    /// Any fence-looking line flips the inside/outside flag, whatever its
    /// marker character.
    #[default]
    Toggle,
    /// Only a fence line with the same marker character closes the region.
    MatchKind,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence marker at the start of already-trimmed line text.
    pub fn sig(trimmed: &str) -> Option<FenceSig> {
        if trimmed.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if trimmed.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn closes(mode: FenceMode, open: FenceSig, line: FenceSig) -> bool {
        match mode {
            FenceMode::Toggle => true,
            FenceMode::MatchKind => open == line,
        }
    }
}

/// Inside/outside tracking for fenced code while sweeping lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FenceState {
    #[default]
    Outside,
    Inside {
        sig: FenceSig,
    },
}

impl FenceState {
    /// Applies a fence line, returning the new state.
    pub fn step(self, mode: FenceMode, sig: FenceSig) -> Self {
        match self {
            FenceState::Outside => FenceState::Inside { sig },
            FenceState::Inside { sig: open } if CodeFence::closes(mode, open, sig) => {
                FenceState::Outside
            }
            inside => inside,
        }
    }

    pub fn is_inside(self) -> bool {
        matches!(self, FenceState::Inside { .. })
    }
}
