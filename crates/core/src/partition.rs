//! Level partitioning of a level-sorted question list.

use std::ops::Range;

use crate::model::{Level, Question};

/// Half-open index range `[start, end)` owned by one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelRange {
    start: usize,
    end: usize,
}

impl LevelRange {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "level range start must not exceed end");
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    #[must_use]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Contiguous, non-overlapping ranges for every level.
///
/// Together the ranges cover `[0, total)` exactly once, in level order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRanges {
    ranges: [LevelRange; Level::COUNT],
}

impl LevelRanges {
    /// Compute the ranges with a single scan over `sorted`.
    ///
    /// `sorted` must already be ordered by level; a level with no questions
    /// gets an empty range positioned where it would have started.
    #[must_use]
    pub fn partition(sorted: &[Question]) -> Self {
        debug_assert!(
            sorted.windows(2).all(|w| w[0].level() <= w[1].level()),
            "questions must be sorted by level before partitioning"
        );

        let mut counts = [0usize; Level::COUNT];
        for question in sorted {
            counts[question.level().index()] += 1;
        }

        let mut ranges = [LevelRange::default(); Level::COUNT];
        let mut start = 0;
        for (range, count) in ranges.iter_mut().zip(counts) {
            *range = LevelRange::new(start, start + count);
            start += count;
        }

        Self { ranges }
    }

    #[must_use]
    pub fn get(&self, level: Level) -> LevelRange {
        self.ranges[level.index()]
    }

    /// Total number of questions covered by all ranges.
    #[must_use]
    pub fn total(&self) -> usize {
        self.ranges[Level::COUNT - 1].end
    }

    pub fn iter(&self) -> impl Iterator<Item = (Level, LevelRange)> + '_ {
        Level::ALL.iter().map(|level| (*level, self.get(*level)))
    }

    /// Level owning the given sorted index, if in bounds.
    #[must_use]
    pub fn level_of(&self, index: usize) -> Option<Level> {
        self.iter()
            .find(|(_, range)| range.contains(index))
            .map(|(level, _)| level)
    }

    /// First level at or after `from` that has at least one question.
    #[must_use]
    pub fn first_non_empty_from(&self, from: Level) -> Option<Level> {
        Level::ALL[from.index()..]
            .iter()
            .copied()
            .find(|level| !self.get(*level).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;

    fn q(level: Level) -> Question {
        QuestionDraft::new("p", "t", level).validate().unwrap()
    }

    #[test]
    fn ranges_cover_sorted_list_exactly_once() {
        let sorted = vec![
            q(Level::Beginner),
            q(Level::Beginner),
            q(Level::Intermediate),
            q(Level::Expert),
            q(Level::Expert),
            q(Level::Expert),
        ];
        let ranges = LevelRanges::partition(&sorted);

        let mut covered = Vec::new();
        let mut expected_start = 0;
        for (level, range) in ranges.iter() {
            assert_eq!(range.start(), expected_start);
            for idx in range.as_range() {
                assert_eq!(sorted[idx].level(), level);
                covered.push(idx);
            }
            expected_start = range.end();
        }
        assert_eq!(covered, (0..sorted.len()).collect::<Vec<_>>());
        assert_eq!(ranges.total(), sorted.len());
    }

    #[test]
    fn absent_level_gets_empty_range() {
        let sorted = vec![q(Level::Beginner), q(Level::Advanced)];
        let ranges = LevelRanges::partition(&sorted);

        assert_eq!(ranges.get(Level::Beginner), LevelRange::new(0, 1));
        assert!(ranges.get(Level::Intermediate).is_empty());
        assert_eq!(ranges.get(Level::Intermediate).start(), 1);
        assert_eq!(ranges.get(Level::Advanced), LevelRange::new(1, 2));
        assert!(ranges.get(Level::Expert).is_empty());
    }

    #[test]
    fn lengths_match_level_counts() {
        let sorted = vec![q(Level::Intermediate), q(Level::Intermediate), q(Level::Advanced)];
        let ranges = LevelRanges::partition(&sorted);
        assert_eq!(ranges.get(Level::Beginner).len(), 0);
        assert_eq!(ranges.get(Level::Intermediate).len(), 2);
        assert_eq!(ranges.get(Level::Advanced).len(), 1);
        assert_eq!(ranges.get(Level::Expert).len(), 0);
    }

    #[test]
    fn level_of_and_first_non_empty() {
        let sorted = vec![q(Level::Intermediate), q(Level::Expert)];
        let ranges = LevelRanges::partition(&sorted);

        assert_eq!(ranges.level_of(0), Some(Level::Intermediate));
        assert_eq!(ranges.level_of(1), Some(Level::Expert));
        assert_eq!(ranges.level_of(2), None);
        assert_eq!(
            ranges.first_non_empty_from(Level::Beginner),
            Some(Level::Intermediate)
        );
        assert_eq!(
            ranges.first_non_empty_from(Level::Advanced),
            Some(Level::Expert)
        );
        assert_eq!(LevelRanges::partition(&[]).first_non_empty_from(Level::Beginner), None);
    }
}
