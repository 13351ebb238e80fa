//! Google Translate TTS client.
//!
//! Fetches synthesized speech for short narration text and writes the MP3
//! to the configured audio directory. This is the same unauthenticated
//! endpoint the gTTS tooling uses; it only accepts short inputs, which the
//! one-sentence narration stays well inside.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use newsbrief_core::{CollabError, SpeechSynthesizer};

use crate::error::NlpError;

/// Client for the Translate TTS endpoint.
pub struct GoogleTtsClient {
    client: Client,
    base_url: String,
    audio_dir: PathBuf,
}

impl GoogleTtsClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(audio_dir: &Path, timeout_secs: u64) -> Result<Self, NlpError> {
        Self::with_base_url(audio_dir, timeout_secs, "https://translate.google.com")
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn with_base_url(
        audio_dir: &Path,
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
            audio_dir: audio_dir.to_owned(),
        })
    }

    /// Synthesizes `text` in `language` and writes `summary_{language}.mp3`
    /// under the audio directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// - [`NlpError::UnexpectedStatus`] on a non-2xx response.
    /// - [`NlpError::Http`] on network failure.
    /// - [`NlpError::Io`] if the file cannot be written.
    pub async fn synthesize_to_file(
        &self,
        text: &str,
        language: &str,
    ) -> Result<PathBuf, NlpError> {
        let url = format!("{}/translate_tts", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NlpError::UnexpectedStatus {
                service: "tts",
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;

        tokio::fs::create_dir_all(&self.audio_dir).await?;
        let path = self.audio_dir.join(format!("summary_{language}.mp3"));
        tokio::fs::write(&path, &bytes).await?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote narration audio");
        Ok(path)
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsClient {
    async fn synthesize(&self, text: &str, language: &str) -> Result<PathBuf, CollabError> {
        self.synthesize_to_file(text, language)
            .await
            .map_err(|e| CollabError::service("tts", e))
    }
}
