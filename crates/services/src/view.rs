//! Collaborator contracts for the presentation layer.

use async_trait::async_trait;
use trainer_core::model::Question;

use crate::error::RenderError;

/// Where a formula is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSurface {
    /// The formula the learner must reproduce.
    Target,
    /// Live preview of the learner's own input.
    Preview,
}

/// Notifications sent from a session to whatever displays it.
pub trait QuizView: Send + Sync {
    fn on_question_shown(&self, question: &Question, position_label: &str);

    fn on_judgement_result(&self, correct: bool);

    fn on_hint_requested(&self, hint: &str);

    fn on_cycle_restarted(&self);

    /// No session could be started; `message` is shown in place of a question.
    fn on_unavailable(&self, message: &str);
}

/// Renders formula markup into visual form.
#[async_trait]
pub trait FormulaRenderer: Send + Sync {
    /// # Errors
    ///
    /// Returns `RenderError` if the markup could not be rendered.
    async fn render_formula(&self, surface: RenderSurface, markup: &str)
    -> Result<(), RenderError>;
}

/// Renderer for views that show raw markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

#[async_trait]
impl FormulaRenderer for NoopRenderer {
    async fn render_formula(
        &self,
        _surface: RenderSurface,
        _markup: &str,
    ) -> Result<(), RenderError> {
        Ok(())
    }
}
