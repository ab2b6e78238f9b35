use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::{QuestionSource, Storage};
use trainer_core::model::TrainerSettings;
use trainer_core::{ProgressionController, QuestionStore, StoreError};

use super::service::TrainerSession;
use crate::config::settings_from_env;
use crate::error::TrainerError;
use crate::view::{FormulaRenderer, NoopRenderer, QuizView};

pub const LOAD_FAILED_MESSAGE: &str = "Error loading questions.";
pub const NO_QUESTIONS_MESSAGE: &str = "No questions available.";

/// Loads a question set and starts sessions over it.
#[derive(Clone)]
pub struct TrainerLoopService {
    source: Arc<dyn QuestionSource>,
    renderer: Arc<dyn FormulaRenderer>,
    settings: TrainerSettings,
}

impl TrainerLoopService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>, settings: TrainerSettings) -> Self {
        Self {
            source,
            renderer: Arc::new(NoopRenderer),
            settings,
        }
    }

    /// Build a service reading from the location in `settings`.
    #[must_use]
    pub fn from_settings(settings: TrainerSettings) -> Self {
        let storage = Storage::from_settings(&settings);
        Self::new(storage.questions, settings)
    }

    /// Build a service configured from `TRAINER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::Settings` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, TrainerError> {
        Ok(Self::from_settings(settings_from_env()?))
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn FormulaRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &TrainerSettings {
        &self.settings
    }

    /// Load the question set, start a session and show its first question.
    ///
    /// On failure the view is told why no session is available.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::LoadFailure` if the source fails and
    /// `TrainerError::Dataset` if it yields no questions.
    pub async fn start(&self, view: Arc<dyn QuizView>) -> Result<TrainerSession, TrainerError> {
        let questions = match self.source.load_questions().await {
            Ok(questions) => questions,
            Err(err) => {
                tracing::error!(source = %self.source.describe(), %err, "failed to load questions");
                view.on_unavailable(LOAD_FAILED_MESSAGE);
                return Err(err.into());
            }
        };

        let store = match QuestionStore::new(questions) {
            Ok(store) => store,
            Err(err) => {
                tracing::error!(source = %self.source.describe(), %err, "question set is empty");
                view.on_unavailable(NO_QUESTIONS_MESSAGE);
                return Err(err.into());
            }
        };
        log_loaded(&self.source.describe(), &store);

        let rng = self
            .settings
            .seed()
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let controller = ProgressionController::from_settings(store, &self.settings, rng);
        let session = TrainerSession::new(controller, view, Arc::clone(&self.renderer));
        session.show_current().await;
        Ok(session)
    }
}

fn log_loaded(source: &str, store: &QuestionStore) {
    let [beginner, intermediate, advanced, expert] = store.level_counts().map(|(_, n)| n);
    tracing::info!(
        source,
        total = store.len(),
        beginner,
        intermediate,
        advanced,
        expert,
        "question set loaded"
    );
}

/// True if `err` means the data set had nothing to ask.
#[must_use]
pub fn is_empty_dataset(err: &TrainerError) -> bool {
    matches!(err, TrainerError::Dataset(StoreError::EmptyDataset))
}
