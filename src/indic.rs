//! High-level per-language transcription, the main entry point of the crate.

use std::path::Path;

#[cfg(feature = "hub")]
use log::info;

use crate::audio::{self, SAMPLE_RATE};
use crate::engines::whisper::{WhisperEngine, WhisperInferenceParams};
use crate::error::AsrError;
use crate::languages::Language;
use crate::{TranscriptionEngine, TranscriptionResult};

/// Speech recognition for one Indic language.
///
/// Owns a loaded whisper engine bound to that language's pretrained
/// checkpoint. Construction is the expensive step; transcription calls are
/// synchronous and can be repeated on the same instance.
pub struct IndicAsr {
    language: Language,
    engine: WhisperEngine,
}

impl IndicAsr {
    /// Fetch the checkpoint for `language` from the Hugging Face Hub and
    /// load it. Uses the `HF_TOKEN` environment variable for auth, if set.
    #[cfg(feature = "hub")]
    pub fn new(language: Language) -> Result<Self, AsrError> {
        let model = language.model();
        info!("loading {} for language {language}", model.display_name);

        let model_path = crate::hub::HubClient::new()?.fetch(model)?;
        Self::with_model_path(language, &model_path)
    }

    /// Parse a language code, then fetch and load as [`IndicAsr::new`].
    #[cfg(feature = "hub")]
    pub fn from_code(code: &str) -> Result<Self, AsrError> {
        Self::new(Language::from_code(code)?)
    }

    /// Load a checkpoint from a local weight file, without hub access.
    pub fn with_model_path(language: Language, model_path: &Path) -> Result<Self, AsrError> {
        let mut engine = WhisperEngine::new();
        engine.load_model(model_path)?;

        Ok(Self { language, engine })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Transcribe a 16 kHz mono PCM int16 WAV file.
    pub fn transcribe_file(&mut self, wav_path: &Path) -> Result<TranscriptionResult, AsrError> {
        let samples = audio::read_wav_samples(wav_path)?;
        self.transcribe_samples(samples, SAMPLE_RATE)
    }

    /// Transcribe already-decoded samples. `sample_rate` must be 16 kHz.
    pub fn transcribe_samples(
        &mut self,
        samples: Vec<f32>,
        sample_rate: u32,
    ) -> Result<TranscriptionResult, AsrError> {
        if sample_rate != SAMPLE_RATE {
            return Err(AsrError::InvalidAudio(format!(
                "expected {SAMPLE_RATE} Hz sample rate, found {sample_rate} Hz"
            )));
        }

        let params = WhisperInferenceParams {
            language: Some(self.language.code().to_string()),
            ..Default::default()
        };

        self.engine.transcribe_samples(samples, Some(params))
    }
}
