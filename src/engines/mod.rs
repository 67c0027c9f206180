//! Speech recognition engines.
//!
//! Inference is delegated entirely to pretrained backends; engines here
//! only adapt a backend to the [`crate::TranscriptionEngine`] trait.
//!
//! - **Whisper** — whisper.cpp via `whisper-rs`, loading a single GGML
//!   weight file (e.g. `ggml-model.bin`). Used for the Indic checkpoints.

#[cfg(feature = "whisper")]
pub mod whisper;
