//! NLP and speech-synthesis collaborator clients.
//!
//! [`HfInferenceClient`] drives three hosted models (sentiment
//! classification, summarization, named-entity recognition) through the
//! Hugging Face Inference API. [`GoogleTtsClient`] turns narration text into
//! an MP3 via the Translate TTS endpoint. Both implement the corresponding
//! `newsbrief-core` capability traits.

pub mod error;
pub mod hf;
pub mod tts;

pub use error::NlpError;
pub use hf::HfInferenceClient;
pub use tts::GoogleTtsClient;
