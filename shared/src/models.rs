use indexmap::IndexMap;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::error::{PollError, Result};

/// Options of a poll keyed by their stringified creation index.
pub type PollOptions = IndexMap<String, PollOption>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollOption {
    pub label: String,
    #[serde(default)]
    pub votes: i64,
}

impl PollOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            votes: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Poll {
    /// Kept verbatim as read from the file; new polls get a lowercase v4 uuid.
    pub id: String,
    pub question: String,
    pub options: PollOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePollRequest {
    pub question: String,
    pub options: Vec<String>,
}

impl Poll {
    /// Builds a fresh poll with a random id. Labels are taken as-is: empty
    /// lists and duplicate labels are accepted.
    pub fn new(request: CreatePollRequest) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), request.question, request.options)
    }

    pub fn with_id<I, S>(id: impl Into<String>, question: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| (i.to_string(), PollOption::new(label)))
            .collect();

        Self {
            id: id.into(),
            question: question.into(),
            options,
        }
    }

    /// Adds one vote to the option stored under `key` and returns its new count.
    pub fn cast_vote(&mut self, key: &str) -> Result<i64> {
        let option = self.options.get_mut(key).ok_or(PollError::OptionNotFound)?;
        option.votes += 1;
        Ok(option.votes)
    }

    pub fn total_votes(&self) -> i64 {
        self.options.values().map(|option| option.votes).sum()
    }
}
