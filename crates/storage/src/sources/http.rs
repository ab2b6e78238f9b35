use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use trainer_core::model::Question;

use super::mapping::parse_question_set;
use crate::repository::{QuestionSource, StorageError};

/// Question set fetched with a single GET of a static JSON document.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(StorageError::NotFound),
            status if !status.is_success() => {
                return Err(StorageError::HttpStatus(status.as_u16()));
            }
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        parse_question_set(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
