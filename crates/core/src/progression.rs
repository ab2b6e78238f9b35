use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::evaluator::{AnswerEvaluator, feedback_message};
use crate::model::{Level, Question, TrainerSettings};
use crate::shuffle::shuffle_range;
use crate::store::QuestionStore;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressionError {
    #[error("advance ticket does not belong to the current question")]
    StaleTicket,

    #[error("level {0} has no questions")]
    EmptyLevel(Level),
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Current level and position within that level's shuffled order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionState {
    pub level: Level,
    pub position: usize,
}

impl ProgressionState {
    pub const START: Self = Self {
        level: Level::Beginner,
        position: 0,
    };
}

/// Proof that the current question was judged correct.
///
/// Issued by `ProgressionController::submit_answer` and consumed by
/// `ProgressionController::advance`. A ticket is only valid until the next
/// transition of the controller that issued it, so an answer to one question
/// can never advance past another, nor advance a different session.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an advance ticket does nothing unless passed to `advance`"]
pub struct AdvanceTicket {
    issuer: u64,
    step: u64,
}

/// Outcome of judging a submission against the current question.
#[derive(Debug, PartialEq, Eq)]
pub enum Judgement {
    Correct(AdvanceTicket),
    Incorrect,
}

impl Judgement {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Judgement::Correct(_))
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        feedback_message(self.is_correct())
    }

    #[must_use]
    pub fn into_ticket(self) -> Option<AdvanceTicket> {
        match self {
            Judgement::Correct(ticket) => Some(ticket),
            Judgement::Incorrect => None,
        }
    }
}

/// Transition taken by a successful advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question of the same level.
    Next { level: Level, position: usize },
    /// The level was exhausted; moved to position 0 of the next non-empty level.
    LevelCompleted { from: Level, to: Level },
    /// The last level was exhausted; every level was reshuffled and the cycle
    /// starts again at the first non-empty level.
    CycleRestarted { level: Level },
}

/// The question currently selected, with its place in the set.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    question: &'a Question,
    store_index: usize,
    state: ProgressionState,
    ordinal: usize,
    total: usize,
}

impl<'a> Selection<'a> {
    #[must_use]
    pub fn question(&self) -> &'a Question {
        self.question
    }

    /// Index of the question in the level-sorted store.
    #[must_use]
    pub fn store_index(&self) -> usize {
        self.store_index
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.state.level
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.state.position
    }

    /// 1-based ordinal across the whole set.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Label such as `Question 3 of 12 (intermediate)`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!(
            "Question {} of {} ({})",
            self.ordinal, self.total, self.state.level
        )
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Decides which question is current and how the session moves forward.
///
/// Owns the level-sorted store, a per-level shuffled order over it, and the
/// `(level, position)` pointer. After every transition the pointer refers to
/// a selectable question: empty levels are skipped, and exhausting the last
/// level restarts the cycle with fresh per-level shuffles.
pub struct ProgressionController<R = StdRng> {
    id: u64,
    store: QuestionStore,
    order: Vec<usize>,
    state: ProgressionState,
    evaluator: AnswerEvaluator,
    reshuffle_on_restart: bool,
    step: u64,
    cycles: u64,
    rng: R,
}

static NEXT_CONTROLLER_ID: AtomicU64 = AtomicU64::new(0);

impl ProgressionController<StdRng> {
    /// Controller with default settings and an OS-seeded generator.
    #[must_use]
    pub fn new(store: QuestionStore) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }
}

impl<R: Rng> ProgressionController<R> {
    /// Controller with default settings drawing randomness from `rng`.
    #[must_use]
    pub fn with_rng(store: QuestionStore, rng: R) -> Self {
        Self::build(store, rng, AnswerEvaluator::default(), true, true)
    }

    #[must_use]
    pub fn from_settings(store: QuestionStore, settings: &TrainerSettings, rng: R) -> Self {
        Self::build(
            store,
            rng,
            AnswerEvaluator::new(settings.delimiter()),
            settings.shuffle_on_load(),
            settings.reshuffle_on_restart(),
        )
    }

    fn build(
        store: QuestionStore,
        rng: R,
        evaluator: AnswerEvaluator,
        shuffle_on_load: bool,
        reshuffle_on_restart: bool,
    ) -> Self {
        let order = (0..store.len()).collect();
        let mut controller = Self {
            id: NEXT_CONTROLLER_ID.fetch_add(1, Ordering::Relaxed),
            store,
            order,
            state: ProgressionState::START,
            evaluator,
            reshuffle_on_restart,
            step: 0,
            cycles: 0,
            rng,
        };
        if shuffle_on_load {
            controller.shuffle_levels();
        }
        controller.state = controller.cycle_start();
        controller
    }

    /// Move past the current question.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::StaleTicket` if `ticket` was issued by
    /// another controller or before the most recent transition.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> Result<Advance, ProgressionError> {
        if ticket.issuer != self.id || ticket.step != self.step {
            return Err(ProgressionError::StaleTicket);
        }
        Ok(self.step_forward())
    }

    fn step_forward(&mut self) -> Advance {
        self.step += 1;

        let from = self.state.level;
        let position = self.state.position + 1;
        if position < self.store.range(from).len() {
            self.state.position = position;
            tracing::debug!(level = %from, position, "question advanced");
            return Advance::Next {
                level: from,
                position,
            };
        }

        let next = from
            .next()
            .and_then(|level| self.store.ranges().first_non_empty_from(level));
        if let Some(to) = next {
            self.state = ProgressionState {
                level: to,
                position: 0,
            };
            tracing::debug!(%from, %to, "level completed");
            return Advance::LevelCompleted { from, to };
        }

        self.restart_cycle();
        Advance::CycleRestarted {
            level: self.state.level,
        }
    }

    fn restart_cycle(&mut self) {
        if self.reshuffle_on_restart {
            self.shuffle_levels();
        }
        self.cycles += 1;
        self.state = self.cycle_start();
        tracing::info!(cycles = self.cycles, "question cycle restarted");
    }

    fn shuffle_levels(&mut self) {
        for (_, range) in self.store.ranges().iter() {
            shuffle_range(&mut self.order, range.as_range(), &mut self.rng);
        }
    }
}

impl<R> ProgressionController<R> {
    #[must_use]
    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    /// Current permutation of store indices.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[must_use]
    pub fn state(&self) -> ProgressionState {
        self.state
    }

    #[must_use]
    pub fn evaluator(&self) -> &AnswerEvaluator {
        &self.evaluator
    }

    /// Number of full cycles completed so far.
    #[must_use]
    pub fn cycles_completed(&self) -> u64 {
        self.cycles
    }

    #[must_use]
    pub fn current(&self) -> Selection<'_> {
        let slot = self.store.range(self.state.level).start() + self.state.position;
        let store_index = self.order[slot];
        Selection {
            question: &self.store.questions()[store_index],
            store_index,
            state: self.state,
            ordinal: slot + 1,
            total: self.store.len(),
        }
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        self.current().question().hint()
    }

    /// Return the current question, optionally jumping to the start of `level`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::EmptyLevel` if `level` has no questions; the
    /// current selection is left unchanged.
    pub fn select(&mut self, level: Option<Level>) -> Result<Selection<'_>, ProgressionError> {
        if let Some(level) = level {
            if self.store.range(level).is_empty() {
                return Err(ProgressionError::EmptyLevel(level));
            }
            self.state = ProgressionState { level, position: 0 };
            self.step += 1;
            tracing::debug!(%level, "level selected");
        }
        Ok(self.current())
    }

    /// Judge `submission` against the current question.
    #[must_use]
    pub fn submit_answer(&self, submission: &str) -> Judgement {
        if self
            .evaluator
            .is_correct(submission, self.current().question())
        {
            Judgement::Correct(AdvanceTicket {
                issuer: self.id,
                step: self.step,
            })
        } else {
            Judgement::Incorrect
        }
    }

    // Non-empty store guarantees some level has questions.
    fn cycle_start(&self) -> ProgressionState {
        let level = self
            .store
            .ranges()
            .first_non_empty_from(Level::Beginner)
            .unwrap_or(Level::Beginner);
        ProgressionState { level, position: 0 }
    }
}

impl<R> fmt::Debug for ProgressionController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressionController")
            .field("questions_len", &self.store.len())
            .field("state", &self.state)
            .field("step", &self.step)
            .field("cycles", &self.cycles)
            .field("reshuffle_on_restart", &self.reshuffle_on_restart)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
