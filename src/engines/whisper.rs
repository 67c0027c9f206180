use std::path::Path;

use log::{debug, info};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::error::AsrError;
use crate::{TranscriptionEngine, TranscriptionResult, TranscriptionSegment};

/// Minimum audio length whisper.cpp handles reliably: 0.5 s at 16 kHz.
const MIN_AUDIO_SAMPLES: usize = 8_000;

#[derive(Debug, Clone)]
pub struct WhisperModelParams {
    pub use_gpu: bool,
    pub gpu_device: i32,
}

impl Default for WhisperModelParams {
    fn default() -> Self {
        Self {
            use_gpu: true,
            gpu_device: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WhisperInferenceParams {
    /// ISO-639-1 language hint, or `None` for autodetection.
    pub language: Option<String>,
    pub translate: bool,
    pub initial_prompt: Option<String>,
    pub n_threads: i32,
}

impl Default for WhisperInferenceParams {
    fn default() -> Self {
        Self {
            language: None,
            translate: false,
            initial_prompt: None,
            n_threads: optimal_threads(),
        }
    }
}

/// Threads handed to whisper.cpp, capped at 8 to avoid diminishing returns.
pub(crate) fn optimal_threads() -> i32 {
    std::thread::available_parallelism()
        .map(|n| n.get().min(8) as i32)
        .unwrap_or(4)
}

/// Transcription engine backed by a whisper.cpp GGML checkpoint.
pub struct WhisperEngine {
    ctx: Option<WhisperContext>,
}

impl Default for WhisperEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WhisperEngine {
    pub fn new() -> Self {
        Self { ctx: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.ctx.is_some()
    }
}

impl TranscriptionEngine for WhisperEngine {
    type InferenceParams = WhisperInferenceParams;
    type ModelParams = WhisperModelParams;

    fn load_model_with_params(
        &mut self,
        model_path: &Path,
        params: Self::ModelParams,
    ) -> Result<(), AsrError> {
        if !model_path.is_file() {
            return Err(AsrError::ModelNotFound(model_path.display().to_string()));
        }

        let path_str = model_path.to_str().ok_or_else(|| {
            AsrError::ModelNotFound(format!(
                "model path is not valid UTF-8: {}",
                model_path.display()
            ))
        })?;

        let mut ctx_params = WhisperContextParameters::default();
        ctx_params.use_gpu(params.use_gpu);
        ctx_params.gpu_device(params.gpu_device);

        let ctx = WhisperContext::new_with_params(path_str, ctx_params)
            .map_err(|e| AsrError::ModelLoad(e.to_string()))?;

        info!("loaded whisper model from {}", model_path.display());
        self.ctx = Some(ctx);
        Ok(())
    }

    fn unload_model(&mut self) {
        self.ctx = None;
    }

    fn transcribe_samples(
        &mut self,
        samples: Vec<f32>,
        params: Option<Self::InferenceParams>,
    ) -> Result<TranscriptionResult, AsrError> {
        let ctx = self.ctx.as_ref().ok_or(AsrError::ModelNotLoaded)?;

        if samples.len() < MIN_AUDIO_SAMPLES {
            return Err(AsrError::InvalidAudio(format!(
                "audio too short: {} samples, need at least {MIN_AUDIO_SAMPLES} (0.5 s at 16 kHz)",
                samples.len()
            )));
        }

        let params = params.unwrap_or_default();
        let language = params.language.as_deref();

        let mut full_params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        full_params.set_language(language);
        full_params.set_translate(params.translate);
        full_params.set_n_threads(params.n_threads);
        full_params.set_print_special(false);
        full_params.set_print_progress(false);
        full_params.set_print_realtime(false);
        full_params.set_print_timestamps(false);
        if let Some(prompt) = params.initial_prompt.as_deref() {
            full_params.set_initial_prompt(prompt);
        }

        let mut state = ctx
            .create_state()
            .map_err(|e| AsrError::ModelLoad(e.to_string()))?;

        let started = std::time::Instant::now();
        state
            .full(full_params, &samples)
            .map_err(|e| AsrError::Inference(e.to_string()))?;
        debug!(
            "whisper inference took {} ms for {} samples",
            started.elapsed().as_millis(),
            samples.len()
        );

        let n_segments = state
            .full_n_segments()
            .map_err(|e| AsrError::Inference(e.to_string()))?;

        let mut text = String::new();
        let mut segments = Vec::with_capacity(n_segments as usize);

        for i in 0..n_segments {
            let segment_text = state
                .full_get_segment_text(i)
                .map_err(|e| AsrError::Inference(format!("segment {i}: {e}")))?;

            // Timestamps come back in centiseconds.
            let start = state.full_get_segment_t0(i).unwrap_or(0).max(0) as f32 / 100.0;
            let end = state.full_get_segment_t1(i).unwrap_or(0).max(0) as f32 / 100.0;

            text.push_str(&segment_text);
            segments.push(TranscriptionSegment {
                start,
                end,
                text: segment_text,
            });
        }

        Ok(TranscriptionResult {
            text: text.trim().to_string(),
            segments: Some(segments),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{optimal_threads, WhisperInferenceParams, WhisperModelParams};

    #[test]
    fn default_model_params_prefer_gpu_device_zero() {
        let params = WhisperModelParams::default();
        assert!(params.use_gpu);
        assert_eq!(params.gpu_device, 0);
    }

    #[test]
    fn default_inference_params_autodetect_language() {
        let params = WhisperInferenceParams::default();
        assert!(params.language.is_none());
        assert!(!params.translate);
        assert!(params.n_threads >= 1);
    }

    #[test]
    fn thread_count_is_capped() {
        assert!((1..=8).contains(&optimal_threads()));
    }
}
