//! Endings and turn outcomes.

use crate::narrative;

/// The four ways a game can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Every quest completed.
    Good,
    /// The quota was missed.
    Deportation,
    /// Quota met, quests unfinished.
    AverageWorker,
    /// The skeleton was dug up.
    Skeleton,
}

impl Ending {
    /// Pick the end-of-period ending.
    pub fn for_period_end(all_quests_complete: bool, quota_met: bool) -> Self {
        if all_quests_complete {
            Self::Good
        } else if !quota_met {
            Self::Deportation
        } else {
            Self::AverageWorker
        }
    }

    /// Banner shown above the ending text.
    pub fn title(self) -> &'static str {
        match self {
            Self::Deportation | Self::Skeleton => "GAME OVER",
            Self::Good | Self::AverageWorker => "THE END",
        }
    }

    /// Ending text, one entry per paragraph.
    pub fn paragraphs(self) -> &'static [&'static str] {
        match self {
            Self::Good => narrative::GOOD_ENDING,
            Self::Deportation => narrative::DEPORTATION_ENDING,
            Self::AverageWorker => narrative::AVERAGE_WORKER_ENDING,
            Self::Skeleton => narrative::SKELETON_ENDING,
        }
    }
}

/// What the caller should do after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Render and read the next command.
    Continue,
    /// The player asked to leave.
    Quit,
    /// The story is over.
    Finished(Ending),
}

impl Flow {
    /// Whether the loop should stop.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_end_priority() {
        assert_eq!(Ending::for_period_end(true, false), Ending::Good);
        assert_eq!(Ending::for_period_end(false, false), Ending::Deportation);
        assert_eq!(Ending::for_period_end(false, true), Ending::AverageWorker);
    }

    #[test]
    fn titles() {
        assert_eq!(Ending::Skeleton.title(), "GAME OVER");
        assert_eq!(Ending::Good.title(), "THE END");
    }

    #[test]
    fn flow_terminal() {
        assert!(!Flow::Continue.is_terminal());
        assert!(Flow::Quit.is_terminal());
        assert!(Flow::Finished(Ending::Good).is_terminal());
    }
}
