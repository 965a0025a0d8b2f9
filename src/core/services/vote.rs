use crate::core::models::vote::{Direction, Subject, VoteState};
use std::collections::HashMap;

// Same direction twice cancels the vote; opposite direction flips it.
pub fn apply_vote(current: VoteState, direction: Direction) -> VoteState {
    match (direction, current) {
        (Direction::Up, VoteState::Up) => VoteState::Neutral,
        (Direction::Up, _) => VoteState::Up,
        (Direction::Down, VoteState::Down) => VoteState::Neutral,
        (Direction::Down, _) => VoteState::Down,
    }
}

// Session-local vote state, keyed by subject. Nothing here survives a reload;
// the baseline counts stay server-authoritative.
#[derive(Debug, Clone, Default)]
pub struct VoteLedger {
    entries: HashMap<Subject, VoteState>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cast(&mut self, subject: Subject, direction: Direction) -> VoteState {
        let next = apply_vote(self.state(subject), direction);
        if next == VoteState::Neutral {
            self.entries.remove(&subject);
        } else {
            self.entries.insert(subject, next);
        }
        next
    }

    pub fn state(&self, subject: Subject) -> VoteState {
        self.entries.get(&subject).copied().unwrap_or_default()
    }

    pub fn adjusted(&self, subject: Subject, baseline: i64) -> i64 {
        baseline + self.state(subject).offset()
    }
}
