use std::io::Write;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use services::{
    LOAD_FAILED_MESSAGE, NO_QUESTIONS_MESSAGE, QuizView, TrainerError, TrainerLoopService,
    is_empty_dataset,
};
use storage::{InMemorySource, QuestionSource, StorageError};
use trainer_core::model::{Level, Question, TrainerSettingsDraft};
use trainer_core::Advance;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Default)]
struct ScriptedView {
    shown: Mutex<Vec<String>>,
    unavailable: Mutex<Vec<String>>,
    restarts: Mutex<u32>,
}

impl QuizView for ScriptedView {
    fn on_question_shown(&self, _question: &Question, position_label: &str) {
        self.shown.lock().unwrap().push(position_label.to_owned());
    }

    fn on_judgement_result(&self, _correct: bool) {}

    fn on_hint_requested(&self, _hint: &str) {}

    fn on_cycle_restarted(&self) {
        *self.restarts.lock().unwrap() += 1;
    }

    fn on_unavailable(&self, message: &str) {
        self.unavailable.lock().unwrap().push(message.to_owned());
    }
}

struct UnreachableSource;

#[async_trait]
impl QuestionSource for UnreachableSource {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        Err(StorageError::Connection("connection refused".into()))
    }

    fn describe(&self) -> String {
        "unreachable".into()
    }
}

const QUESTION_SET: &str = r#"[
    {"prompt": "Write the intermediate line", "target": "y=mx+c", "hint": "slope", "level": "intermediate", "alternatives": ["y=mx+b"]},
    {"prompt": "Square x", "target": "x^2", "hint": "caret", "level": "beginner"},
    {"prompt": "Cube x", "target": "x^3", "hint": "caret again", "level": "beginner"}
]"#;

#[tokio::test]
async fn file_backed_session_cycles_through_levels() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(QUESTION_SET.as_bytes()).unwrap();

    let settings = TrainerSettingsDraft {
        source: Some(file.path().display().to_string()),
        seed: Some(2024),
        ..TrainerSettingsDraft::default()
    }
    .validate()
    .unwrap();
    let service = TrainerLoopService::from_settings(settings);
    let view = Arc::new(ScriptedView::default());

    let mut session = service.start(view.clone()).await.unwrap();
    assert_eq!(session.progress().level, Level::Beginner);
    assert_eq!(session.progress().position, 0);

    let mut beginner_seen = Vec::new();
    for _ in 0..2 {
        let target = session.current().question().target().to_owned();
        beginner_seen.push(target.clone());
        assert!(session.submit_answer(&format!("${target}$")));
        session.request_advance().await.unwrap();
    }
    beginner_seen.sort();
    assert_eq!(beginner_seen, vec!["x^2", "x^3"]);
    assert_eq!(session.progress().level, Level::Intermediate);
    assert_eq!(session.progress().position, 0);

    assert!(!session.submit_answer("y = mx + d"));
    assert!(session.submit_answer("y = mx + b"));
    let advance = session.request_advance().await.unwrap();
    assert_eq!(
        advance,
        Advance::CycleRestarted {
            level: Level::Beginner
        }
    );
    assert_eq!(session.progress().position, 0);
    assert_eq!(*view.restarts.lock().unwrap(), 1);

    let mut order = session.controller().order().to_vec();
    order.sort_unstable();
    assert_eq!(order, vec![0, 1, 2]);

    let shown = view.shown.lock().unwrap().clone();
    assert_eq!(
        shown,
        vec![
            "Question 1 of 3 (beginner)",
            "Question 2 of 3 (beginner)",
            "Question 3 of 3 (intermediate)",
            "Question 1 of 3 (beginner)",
        ]
    );
}

#[tokio::test]
async fn load_failure_is_reported_to_view() {
    init_tracing();
    let service = TrainerLoopService::new(
        Arc::new(UnreachableSource),
        TrainerSettingsDraft::default().validate().unwrap(),
    );
    let view = Arc::new(ScriptedView::default());

    let err = service.start(view.clone()).await.unwrap_err();
    assert!(matches!(
        err,
        TrainerError::LoadFailure(StorageError::Connection(_))
    ));
    assert_eq!(
        view.unavailable.lock().unwrap().as_slice(),
        &[LOAD_FAILED_MESSAGE.to_string()]
    );
    assert!(view.shown.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_question_set_is_reported_to_view() {
    init_tracing();
    let service = TrainerLoopService::new(
        Arc::new(InMemorySource::new(Vec::new())),
        TrainerSettingsDraft::default().validate().unwrap(),
    );
    let view = Arc::new(ScriptedView::default());

    let err = service.start(view.clone()).await.unwrap_err();
    assert!(is_empty_dataset(&err));
    assert_eq!(
        view.unavailable.lock().unwrap().as_slice(),
        &[NO_QUESTIONS_MESSAGE.to_string()]
    );
}

#[tokio::test]
async fn missing_question_file_is_a_load_failure() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let settings = TrainerSettingsDraft {
        source: Some(dir.path().join("nope.json").display().to_string()),
        ..TrainerSettingsDraft::default()
    }
    .validate()
    .unwrap();
    let view = Arc::new(ScriptedView::default());

    let err = TrainerLoopService::from_settings(settings)
        .start(view.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, TrainerError::LoadFailure(StorageError::NotFound)));
}
