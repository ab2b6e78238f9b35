use thiserror::Error;

use crate::model::{Level, Question};
use crate::partition::{LevelRange, LevelRanges};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("no questions available")]
    EmptyDataset,
}

/// Immutable, level-sorted question list with its per-level ranges.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<Question>,
    ranges: LevelRanges,
}

impl QuestionStore {
    /// Stable-sort `questions` by level and partition them.
    ///
    /// Questions sharing a level keep their input order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyDataset` if `questions` is empty.
    pub fn new(mut questions: Vec<Question>) -> Result<Self, StoreError> {
        if questions.is_empty() {
            return Err(StoreError::EmptyDataset);
        }

        questions.sort_by_key(Question::level);
        let ranges = LevelRanges::partition(&questions);

        Ok(Self { questions, ranges })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`: construction rejects empty datasets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn ranges(&self) -> &LevelRanges {
        &self.ranges
    }

    #[must_use]
    pub fn range(&self, level: Level) -> LevelRange {
        self.ranges.get(level)
    }

    /// Per-level question counts, in level order.
    #[must_use]
    pub fn level_counts(&self) -> [(Level, usize); Level::COUNT] {
        Level::ALL.map(|level| (level, self.range(level).len()))
    }
}
