use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from the ASR pipeline.
#[derive(Debug, Clone, Error)]
pub enum AsrError {
    /// The language code is not one of the supported Indic codes.
    #[error("unsupported language: {code:?} (expected one of {supported:?})")]
    UnsupportedLanguage {
        code: String,
        supported: &'static [&'static str],
    },

    /// The audio file does not exist at the given path.
    #[error("audio file not found: {}", .0.display())]
    AudioNotFound(PathBuf),

    /// The audio exists but cannot be used: wrong container, wrong sample
    /// rate, wrong channel count, or too short to transcribe.
    #[error("invalid audio: {0}")]
    InvalidAudio(String),

    /// Transcription was requested before a model was loaded.
    #[error("model not loaded, call load_model() first")]
    ModelNotLoaded,

    /// The model weight file does not exist at the given path.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The inference backend rejected the model file.
    #[error("model load failed: {0}")]
    ModelLoad(String),

    /// An error occurred during the inference pass.
    #[error("transcription failed: {0}")]
    Inference(String),

    /// Downloading the model from the hub failed.
    #[error("model download failed for {repo_id}: {reason}")]
    Download { repo_id: String, reason: String },

    /// Reading or writing a WAV file failed below the format level.
    #[error("audio i/o failed: {0}")]
    AudioIo(String),
}

impl From<hound::Error> for AsrError {
    fn from(err: hound::Error) -> Self {
        AsrError::AudioIo(err.to_string())
    }
}
