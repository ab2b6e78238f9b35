use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use trainer_core::model::Level;
use trainer_core::{Advance, AdvanceTicket, ProgressionController, Selection};

use super::progress::SessionProgress;
use crate::error::TrainerError;
use crate::view::{FormulaRenderer, QuizView, RenderSurface};

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One learner's pass through a question set.
///
/// Wraps a `ProgressionController` and relays every transition to the view.
/// Advancing requires a correct answer to the current question; the ticket
/// earned by that answer is held here until `request_advance` spends it.
pub struct TrainerSession {
    controller: ProgressionController<StdRng>,
    view: Arc<dyn QuizView>,
    renderer: Arc<dyn FormulaRenderer>,
    pending: Option<AdvanceTicket>,
}

impl TrainerSession {
    #[must_use]
    pub fn new(
        controller: ProgressionController<StdRng>,
        view: Arc<dyn QuizView>,
        renderer: Arc<dyn FormulaRenderer>,
    ) -> Self {
        Self {
            controller,
            view,
            renderer,
            pending: None,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &ProgressionController<StdRng> {
        &self.controller
    }

    #[must_use]
    pub fn current(&self) -> Selection<'_> {
        self.controller.current()
    }

    /// True once the current question has been answered correctly.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let current = self.controller.current();
        SessionProgress {
            level: current.level(),
            position: current.position(),
            level_total: self.controller.store().range(current.level()).len(),
            ordinal: current.ordinal(),
            total: current.total(),
            cycles_completed: self.controller.cycles_completed(),
            can_advance: self.can_advance(),
        }
    }

    /// Present the current question and render its target formula.
    pub async fn show_current(&self) {
        let current = self.controller.current();
        let question = current.question();
        self.view
            .on_question_shown(question, &current.position_label());
        let markup = self.controller.evaluator().wrap(question.target());
        self.render(RenderSurface::Target, &markup).await;
    }

    /// Re-show the current question, or jump to the first question of `level`.
    ///
    /// Any earned advance is forfeited.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::Progression` if `level` has no questions.
    pub async fn request_select(&mut self, level: Option<Level>) -> Result<(), TrainerError> {
        self.controller.select(level)?;
        self.pending = None;
        self.show_current().await;
        Ok(())
    }

    /// Judge `text` against the current question and report the result.
    ///
    /// An incorrect answer does not revoke an advance already earned.
    pub fn submit_answer(&mut self, text: &str) -> bool {
        let judgement = self.controller.submit_answer(text);
        let correct = judgement.is_correct();
        if let Some(ticket) = judgement.into_ticket() {
            self.pending = Some(ticket);
        }
        tracing::debug!(correct, "answer judged");
        self.view.on_judgement_result(correct);
        correct
    }

    pub fn request_hint(&self) -> String {
        let hint = self.controller.hint().to_owned();
        self.view.on_hint_requested(&hint);
        hint
    }

    /// Move to the next question and show it.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::AdvanceNotAllowed` unless the current question
    /// was answered correctly since it was shown.
    pub async fn request_advance(&mut self) -> Result<Advance, TrainerError> {
        let ticket = self.pending.take().ok_or(TrainerError::AdvanceNotAllowed)?;
        let advance = self.controller.advance(ticket)?;
        if matches!(advance, Advance::CycleRestarted { .. }) {
            self.view.on_cycle_restarted();
        }
        self.show_current().await;
        Ok(advance)
    }

    /// Render the learner's in-progress input.
    pub async fn preview(&self, text: &str) {
        let markup = self.controller.evaluator().wrap(text);
        self.render(RenderSurface::Preview, &markup).await;
    }

    async fn render(&self, surface: RenderSurface, markup: &str) {
        if let Err(err) = self.renderer.render_formula(surface, markup).await {
            tracing::warn!(?surface, %err, "formula rendering failed");
        }
    }
}

impl fmt::Debug for TrainerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainerSession")
            .field("controller", &self.controller)
            .field("can_advance", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
