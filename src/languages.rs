//! Language registry: maps ISO-639-1 codes to pretrained Indic Whisper models.
//!
//! Three languages are supported, each backed by its own fine-tuned
//! AI4Bharat checkpoint on the Hugging Face Hub.

use std::fmt;
use std::str::FromStr;

use crate::error::AsrError;

/// Language codes accepted by [`Language::from_code`].
pub const SUPPORTED_CODES: &[&str] = &["hi", "ta", "gu"];

/// A supported transcription language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Hindi,
    Tamil,
    Gujarati,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Hindi, Language::Tamil, Language::Gujarati];

    /// Parse an ISO-639-1 code (`"hi"`, `"ta"`, `"gu"`).
    pub fn from_code(code: &str) -> Result<Self, AsrError> {
        match code {
            "hi" => Ok(Language::Hindi),
            "ta" => Ok(Language::Tamil),
            "gu" => Ok(Language::Gujarati),
            other => Err(AsrError::UnsupportedLanguage {
                code: other.to_string(),
                supported: SUPPORTED_CODES,
            }),
        }
    }

    /// The ISO-639-1 code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Gujarati => "gu",
        }
    }

    /// The pretrained model backing this language.
    pub fn model(&self) -> &'static ModelInfo {
        match self {
            Language::Hindi => &MODELS[0],
            Language::Tamil => &MODELS[1],
            Language::Gujarati => &MODELS[2],
        }
    }
}

impl FromStr for Language {
    type Err = AsrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Static metadata for a single pretrained checkpoint.
#[derive(Debug)]
pub struct ModelInfo {
    /// Hugging Face Hub repository id.
    pub repo_id: &'static str,
    /// GGML weight file inside the repository.
    pub file_name: &'static str,
    /// Human-readable name for logs and error messages.
    pub display_name: &'static str,
    /// ISO-639-1 code the checkpoint is fine-tuned for.
    pub language: &'static str,
}

/// AI4Bharat Indic Whisper v2 checkpoints, one per supported language.
pub const MODELS: &[ModelInfo] = &[
    ModelInfo {
        repo_id: "ai4bharat/indic-whisper-v2-hi",
        file_name: "ggml-model.bin",
        display_name: "Indic Whisper v2 (Hindi)",
        language: "hi",
    },
    ModelInfo {
        repo_id: "ai4bharat/indic-whisper-v2-ta",
        file_name: "ggml-model.bin",
        display_name: "Indic Whisper v2 (Tamil)",
        language: "ta",
    },
    ModelInfo {
        repo_id: "ai4bharat/indic-whisper-v2-gu",
        file_name: "ggml-model.bin",
        display_name: "Indic Whisper v2 (Gujarati)",
        language: "gu",
    },
];

/// Find the checkpoint for an ISO-639-1 code, if the code is supported.
pub fn find_model_by_code(code: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|m| m.language == code)
}
