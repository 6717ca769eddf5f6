//! Cumulative answer statistics

/// Correct/incorrect tallies, with `total == correct + incorrect`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub correct: u64,
    pub incorrect: u64,
    pub total: u64,
}

impl Statistics {
    pub fn new(correct: u64, incorrect: u64) -> Self {
        Self {
            correct,
            incorrect,
            total: correct + incorrect,
        }
    }

    /// Counters after one more outcome
    pub fn with_outcome(self, is_correct: bool) -> Self {
        let (correct, incorrect) = if is_correct {
            (self.correct.saturating_add(1), self.incorrect)
        } else {
            (self.correct, self.incorrect.saturating_add(1))
        };
        Self {
            correct,
            incorrect,
            total: self.total.saturating_add(1),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.correct.checked_add(self.incorrect) == Some(self.total)
    }
}
