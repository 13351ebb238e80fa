//! Hugging Face Inference API client.
//!
//! One client, three hosted models: DistilBERT SST-2 for sentiment labels,
//! BART-large-CNN for abstractive summaries, and a BERT NER model for
//! entities. Every call is a POST of `{"inputs": ...}` to
//! `{base}/models/{model}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use newsbrief_core::{
    CollabError, Entity, EntityExtractor, SentimentClassifier, Summarizer,
};

use crate::error::NlpError;

const SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
const SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";
const NER_MODEL: &str = "dslim/bert-base-NER";

/// Summary length bounds passed to the summarization model.
const SUMMARY_MAX_LENGTH: u32 = 130;
const SUMMARY_MIN_LENGTH: u32 = 30;

/// Client for the Hugging Face Inference API.
///
/// Use [`HfInferenceClient::new`] for the hosted API or
/// [`HfInferenceClient::with_base_url`] to point at a mock server in tests.
/// The bearer token is optional; without one, calls run against the public
/// rate-limited tier.
pub struct HfInferenceClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<SummaryParameters>,
}

#[derive(Serialize)]
struct SummaryParameters {
    max_length: u32,
    min_length: u32,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
}

/// Classification responses arrive nested (`[[{label, score}]]`) from the
/// hosted pipeline but flat from some deployments; accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct NerItem {
    #[serde(default)]
    entity_group: Option<String>,
    word: String,
}

impl HfInferenceClient {
    /// Creates a client pointed at the hosted Inference API.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(api_token: Option<&str>, timeout_secs: u64) -> Result<Self, NlpError> {
        Self::with_base_url(api_token, timeout_secs, "https://api-inference.huggingface.co")
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn with_base_url(
        api_token: Option<&str>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NlpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_token: api_token.map(str::to_owned),
        })
    }

    /// Classifies `text` and returns the model's raw top label.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError`] on network failure, non-2xx status, unparseable
    /// response, or an empty prediction list.
    pub async fn classify_sentiment(&self, text: &str) -> Result<String, NlpError> {
        let body = self.infer("sentiment", SENTIMENT_MODEL, text, None).await?;
        let parsed: ClassifyResponse =
            serde_json::from_str(&body).map_err(|e| NlpError::Deserialize {
                context: format!("sentiment response from {SENTIMENT_MODEL}"),
                source: e,
            })?;

        let top = match parsed {
            ClassifyResponse::Nested(mut rows) => rows
                .first_mut()
                .and_then(|row| row.drain(..).next()),
            ClassifyResponse::Flat(mut row) => row.drain(..).next(),
        };

        top.map(|ls| ls.label)
            .ok_or(NlpError::EmptyResponse { service: "sentiment" })
    }

    /// Summarizes `text` with BART (130/30 token bounds).
    ///
    /// # Errors
    ///
    /// Returns [`NlpError`] on network failure, non-2xx status (including the
    /// model rejecting over-long input), unparseable response, or an empty
    /// summary list.
    pub async fn summarize(&self, text: &str) -> Result<String, NlpError> {
        let parameters = SummaryParameters {
            max_length: SUMMARY_MAX_LENGTH,
            min_length: SUMMARY_MIN_LENGTH,
        };
        let body = self
            .infer("summarization", SUMMARIZATION_MODEL, text, Some(parameters))
            .await?;
        let parsed: Vec<SummaryItem> =
            serde_json::from_str(&body).map_err(|e| NlpError::Deserialize {
                context: format!("summary response from {SUMMARIZATION_MODEL}"),
                source: e,
            })?;

        parsed
            .into_iter()
            .next()
            .map(|item| item.summary_text)
            .ok_or(NlpError::EmptyResponse {
                service: "summarization",
            })
    }

    /// Extracts named entities from `text`.
    ///
    /// Entities keep the model's grouping order; categories are the raw
    /// `entity_group` labels (`ORG`, `PER`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`NlpError`] on network failure, non-2xx status, or an
    /// unparseable response. An empty entity list is a valid result.
    pub async fn extract_entities(&self, text: &str) -> Result<Vec<Entity>, NlpError> {
        let body = self.infer("ner", NER_MODEL, text, None).await?;
        let parsed: Vec<NerItem> =
            serde_json::from_str(&body).map_err(|e| NlpError::Deserialize {
                context: format!("NER response from {NER_MODEL}"),
                source: e,
            })?;

        Ok(parsed
            .into_iter()
            .map(|item| Entity {
                text: item.word,
                category: item.entity_group.unwrap_or_default(),
            })
            .collect())
    }

    async fn infer(
        &self,
        service: &'static str,
        model: &str,
        inputs: &str,
        parameters: Option<SummaryParameters>,
    ) -> Result<String, NlpError> {
        let url = format!("{}/models/{model}", self.base_url);
        let request = InferenceRequest { inputs, parameters };

        let mut builder = self.client.post(&url).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NlpError::UnexpectedStatus {
                service,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl SentimentClassifier for HfInferenceClient {
    async fn classify(&self, text: &str) -> Result<String, CollabError> {
        self.classify_sentiment(text)
            .await
            .map_err(|e| CollabError::service("sentiment", e))
    }
}

#[async_trait]
impl Summarizer for HfInferenceClient {
    async fn summarize(&self, text: &str) -> Result<String, CollabError> {
        HfInferenceClient::summarize(self, text)
            .await
            .map_err(|e| CollabError::service("summarization", e))
    }
}

#[async_trait]
impl EntityExtractor for HfInferenceClient {
    async fn extract_entities(&self, text: &str) -> Result<Vec<Entity>, CollabError> {
        HfInferenceClient::extract_entities(self, text)
            .await
            .map_err(|e| CollabError::service("ner", e))
    }
}
