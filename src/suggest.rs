use crate::models::Category;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// What the user sees when a suggestion cannot be produced, whatever the
/// underlying reason.
pub const SUGGEST_FAILURE_MESSAGE: &str =
    "Could not generate a new idea. Please try again later.";

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("response contained no task title")]
    EmptyResponse,
}

#[async_trait]
pub trait TaskSuggester: Send + Sync {
    async fn suggest(&self, category: &Category) -> Result<String, SuggestError>;
}

/// Calls the Gemini `generateContent` endpoint. One request, no retry and no
/// timeout beyond the transport defaults. A missing key is surfaced per call
/// so the rest of the app keeps working without one.
pub struct GeminiSuggester {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiSuggester {
    pub fn from_env() -> Self {
        // GEMINI_API_KEY preferred, API_KEY kept as the legacy name
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|key| !key.is_empty());
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl TaskSuggester for GeminiSuggester {
    async fn suggest(&self, category: &Category) -> Result<String, SuggestError> {
        let api_key = self.api_key.as_deref().ok_or(SuggestError::MissingApiKey)?;
        let url = format!("{}/models/{GEMINI_MODEL}:generateContent", self.base_url);

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(category),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SuggestError::Api { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_title(parsed)
    }
}

fn build_prompt(category: &Category) -> String {
    format!(
        "You are an expert at curing boredom. Generate a single, simple, fun, and creative task for someone who is bored.\n\
         The task must fit into the category of \"{}\".\n\
         The task should be something that can be completed in a short amount of time (under an hour).\n\
         Your response MUST be only the task title as a short sentence, without any extra text, formatting, or quotation marks.\n\
         For example, if the category is \"Creative Corner\", a good response would be \"Bake a batch of cookies from scratch\".",
        category.title
    )
}

fn extract_title(response: GenerateContentResponse) -> Result<String, SuggestError> {
    response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .map(|part| part.text.trim().to_string())
        .find(|text| !text.is_empty())
        .ok_or(SuggestError::EmptyResponse)
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::sync::Arc;

    struct CannedSuggester {
        reply: Result<String, ()>,
    }

    #[async_trait]
    impl TaskSuggester for CannedSuggester {
        async fn suggest(&self, _category: &Category) -> Result<String, SuggestError> {
            self.reply
                .clone()
                .map_err(|_| SuggestError::EmptyResponse)
        }
    }

    #[test]
    fn prompt_names_the_category() {
        let category = catalog::find_category("skill").unwrap();
        let prompt = build_prompt(category);
        assert!(prompt.contains("\"Skill Up\""));
        assert!(prompt.contains("under an hour"));
    }

    #[test]
    fn extract_title_takes_the_first_non_empty_part() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ { "text": "  Build a paper plane fleet\n" } ] } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_title(response).unwrap(), "Build a paper plane fleet");
    }

    #[test]
    fn extract_title_rejects_an_empty_reply() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{ "candidates": [] }"#).unwrap();
        assert!(matches!(
            extract_title(response),
            Err(SuggestError::EmptyResponse)
        ));

        let blank: GenerateContentResponse = serde_json::from_str(
            r#"{ "candidates": [ { "content": { "parts": [ { "text": "   " } ] } } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            extract_title(blank),
            Err(SuggestError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn suggesting_without_a_key_is_an_error_not_a_panic() {
        let suggester = GeminiSuggester {
            client: reqwest::Client::new(),
            api_key: None,
            base_url: GEMINI_BASE_URL.to_string(),
        };
        let category = catalog::find_category("creative").unwrap();
        assert!(matches!(
            suggester.suggest(category).await,
            Err(SuggestError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn suggesters_are_swappable_behind_the_trait() {
        let ok: Arc<dyn TaskSuggester> = Arc::new(CannedSuggester {
            reply: Ok("Fold an origami crane".to_string()),
        });
        let category = catalog::find_category("creative").unwrap();
        assert_eq!(
            ok.suggest(category).await.unwrap(),
            "Fold an origami crane"
        );

        let failing: Arc<dyn TaskSuggester> = Arc::new(CannedSuggester { reply: Err(()) });
        assert!(failing.suggest(category).await.is_err());
    }
}
