//! Speech-to-text for Indian languages.
//!
//! A thin wrapper around pretrained AI4Bharat Indic Whisper checkpoints:
//! resolve a language code to a checkpoint, fetch it from the Hugging Face
//! Hub, and transcribe 16 kHz mono WAV audio through whisper.cpp.
//!
//! ```ignore
//! use indic_speech::{IndicAsr, Language};
//!
//! let mut asr = IndicAsr::new(Language::Hindi)?;
//! let result = asr.transcribe_file("speech.wav".as_ref())?;
//! println!("{}", result.text);
//! # Ok::<(), indic_speech::AsrError>(())
//! ```

pub mod audio;
pub mod engines;
pub mod error;
pub mod languages;

#[cfg(feature = "hub")]
pub mod hub;

#[cfg(feature = "whisper")]
mod indic;
#[cfg(feature = "whisper")]
pub use indic::IndicAsr;

pub use error::AsrError;
pub use languages::{Language, ModelInfo};

use std::path::Path;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub segments: Option<Vec<TranscriptionSegment>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptionSegment {
    /// Segment start time in seconds.
    pub start: f32,
    /// Segment end time in seconds.
    pub end: f32,
    pub text: String,
}

pub trait TranscriptionEngine {
    type InferenceParams;
    type ModelParams: Default;

    /// Load with default model params.
    fn load_model(&mut self, model_path: &Path) -> Result<(), AsrError> {
        self.load_model_with_params(model_path, Self::ModelParams::default())
    }

    /// Load with explicit model params.
    fn load_model_with_params(
        &mut self,
        model_path: &Path,
        params: Self::ModelParams,
    ) -> Result<(), AsrError>;

    fn unload_model(&mut self);

    /// Transcribe already-decoded samples (16 kHz, mono, f32 in [-1, 1]).
    fn transcribe_samples(
        &mut self,
        samples: Vec<f32>,
        params: Option<Self::InferenceParams>,
    ) -> Result<TranscriptionResult, AsrError>;

    /// Transcribe a WAV file.
    fn transcribe_file(
        &mut self,
        wav_path: &Path,
        params: Option<Self::InferenceParams>,
    ) -> Result<TranscriptionResult, AsrError> {
        let samples = audio::read_wav_samples(wav_path)?;
        self.transcribe_samples(samples, params)
    }
}
