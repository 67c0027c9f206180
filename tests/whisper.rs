#![cfg(feature = "whisper")]

use indic_speech::engines::whisper::{WhisperEngine, WhisperInferenceParams};
use indic_speech::{AsrError, TranscriptionEngine};

#[test]
fn transcribing_before_load_is_a_typed_error() {
    let mut engine = WhisperEngine::new();
    let samples = vec![0.0_f32; 16_000];

    let error = engine
        .transcribe_samples(samples, None)
        .expect_err("no model loaded");

    assert!(matches!(error, AsrError::ModelNotLoaded));
}

#[test]
fn loading_a_missing_model_file_fails_with_model_not_found() {
    let mut engine = WhisperEngine::new();

    let error = engine
        .load_model("models/does-not-exist.bin".as_ref())
        .expect_err("missing model must fail");

    assert!(matches!(error, AsrError::ModelNotFound(_)));
    assert!(!engine.is_loaded());
}

#[test]
fn inference_params_carry_a_language_hint() {
    let params = WhisperInferenceParams {
        language: Some("hi".to_string()),
        ..Default::default()
    };

    assert_eq!(params.language.as_deref(), Some("hi"));
    assert!(!params.translate);
}
