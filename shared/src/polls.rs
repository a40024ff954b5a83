use indexmap::IndexMap;
use serde::{Serialize, Deserialize};

use crate::models::Poll;

/// Every poll ever created, keyed by id, in creation order. The last entry is
/// the latest poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Polls(IndexMap<String, Poll>);

impl Polls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends `poll`, making it the latest one.
    pub fn insert(&mut self, poll: Poll) {
        // A reused id must still end up last.
        self.0.shift_remove(&poll.id);
        self.0.insert(poll.id.clone(), poll);
    }

    pub fn latest(&self) -> Option<&Poll> {
        self.0.last().map(|(_, poll)| poll)
    }

    pub fn latest_mut(&mut self) -> Option<&mut Poll> {
        self.0.last_mut().map(|(_, poll)| poll)
    }
}

impl FromIterator<Poll> for Polls {
    fn from_iter<I: IntoIterator<Item = Poll>>(iter: I) -> Self {
        let mut polls = Polls::new();
        for poll in iter {
            polls.insert(poll);
        }
        polls
    }
}
