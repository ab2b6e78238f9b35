use trainer_core::model::Question;

use crate::repository::{QuestionRecord, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Parse a JSON array of question records into validated questions.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::InvalidRecord` for the first record that fails validation.
pub fn parse_question_set(json: &str) -> Result<Vec<Question>, StorageError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json).map_err(ser)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_question()
                .map_err(|source| StorageError::InvalidRecord { index, source })
        })
        .collect()
}

/// Serialize questions back into the question set format.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn to_question_set_json(questions: &[Question]) -> Result<String, StorageError> {
    let records: Vec<QuestionRecord> = questions.iter().map(QuestionRecord::from_question).collect();
    serde_json::to_string_pretty(&records).map_err(ser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainer_core::model::{Level, QuestionError};

    #[test]
    fn parses_optional_fields() {
        let json = r#"[
            {"prompt": "Write the quadratic formula", "target": "x=\\frac{-b\\pm\\sqrt{b^2-4ac}}{2a}", "hint": "use \\pm", "level": "advanced"},
            {"prompt": "Square", "target": "x^2", "level": "beginner", "alternatives": ["x^{2}"]}
        ]"#;
        let questions = parse_question_set(json).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].level(), Level::Advanced);
        assert_eq!(questions[0].hint(), "use \\pm");
        assert!(questions[0].alternatives().is_empty());
        assert_eq!(questions[1].hint(), "");
        assert_eq!(questions[1].alternatives(), &["x^{2}".to_string()]);
    }

    #[test]
    fn unknown_level_is_a_serialization_error() {
        let json = r#"[{"prompt": "p", "target": "t", "level": "master"}]"#;
        assert!(matches!(
            parse_question_set(json),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn invalid_record_reports_its_index() {
        let json = r#"[
            {"prompt": "ok", "target": "a", "level": "beginner"},
            {"prompt": "", "target": "b", "level": "beginner"}
        ]"#;
        match parse_question_set(json) {
            Err(StorageError::InvalidRecord { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, QuestionError::EmptyPrompt);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_array_parses_to_empty_set() {
        assert!(parse_question_set("[]").unwrap().is_empty());
    }

    #[test]
    fn serialized_set_parses_back() {
        let json = r#"[{"prompt": "Sum", "target": "\\sum_{i=1}^n i", "hint": "", "level": "expert", "alternatives": ["\\sum_{i=1}^{n} i"]}]"#;
        let questions = parse_question_set(json).unwrap();
        let encoded = to_question_set_json(&questions).unwrap();
        assert_eq!(parse_question_set(&encoded).unwrap(), questions);
    }
}
