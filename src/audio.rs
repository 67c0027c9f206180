use std::path::Path;

use crate::error::AsrError;

/// Sample rate every engine in this crate expects.
pub const SAMPLE_RATE: u32 = 16_000;

/// Requirements: 16 kHz, mono, PCM int16 WAV file.
pub fn read_wav_samples(wav_path: &Path) -> Result<Vec<f32>, AsrError> {
    if !wav_path.exists() {
        return Err(AsrError::AudioNotFound(wav_path.to_path_buf()));
    }

    let mut reader = hound::WavReader::open(wav_path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(AsrError::InvalidAudio(format!(
            "expected 1 channel, found {}",
            spec.channels
        )));
    }

    if spec.sample_rate != SAMPLE_RATE {
        return Err(AsrError::InvalidAudio(format!(
            "expected {SAMPLE_RATE} Hz sample rate, found {} Hz",
            spec.sample_rate
        )));
    }

    if spec.bits_per_sample != 16 {
        return Err(AsrError::InvalidAudio(format!(
            "expected 16 bits per sample, found {}",
            spec.bits_per_sample
        )));
    }

    if spec.sample_format != hound::SampleFormat::Int {
        return Err(AsrError::InvalidAudio(format!(
            "expected Int sample format, found {:?}",
            spec.sample_format
        )));
    }

    let samples: Result<Vec<f32>, _> = reader
        .samples::<i16>()
        .map(|sample| sample.map(|s| s as f32 / i16::MAX as f32))
        .collect();

    Ok(samples?)
}

/// Write normalized f32 samples as a 16 kHz mono PCM int16 WAV file.
pub fn write_wav_samples(wav_path: &Path, samples: &[f32]) -> Result<(), AsrError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(wav_path, spec)?;
    for sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        let pcm = (clamped * i16::MAX as f32).round() as i16;
        writer.write_sample(pcm)?;
    }
    writer.finalize()?;

    Ok(())
}

/// Parameters for the synthetic sine fixture.
#[derive(Debug, Clone)]
pub struct SineSpec {
    pub frequency: f32,
    pub amplitude: f32,
    pub duration_secs: f32,
}

impl Default for SineSpec {
    fn default() -> Self {
        // 3 s of a quiet A note, the smoke-test fixture.
        Self {
            frequency: 440.0,
            amplitude: 0.1,
            duration_secs: 3.0,
        }
    }
}

impl SineSpec {
    /// Number of samples the rendered fixture will contain.
    pub fn sample_count(&self) -> usize {
        (self.duration_secs * SAMPLE_RATE as f32) as usize
    }

    /// Render the sine wave as normalized f32 samples.
    pub fn render(&self) -> Vec<f32> {
        let count = self.sample_count();
        (0..count)
            .map(|i| {
                let t = i as f32 / SAMPLE_RATE as f32;
                self.amplitude * (2.0 * std::f32::consts::PI * self.frequency * t).sin()
            })
            .collect()
    }
}

/// Write a synthetic sine-wave WAV file for smoke testing.
pub fn write_sine_wav(wav_path: &Path, spec: &SineSpec) -> Result<(), AsrError> {
    write_wav_samples(wav_path, &spec.render())
}

#[cfg(test)]
mod tests {
    use super::{SineSpec, SAMPLE_RATE};

    #[test]
    fn default_sine_spec_renders_three_seconds() {
        let spec = SineSpec::default();
        let samples = spec.render();
        assert_eq!(samples.len(), 3 * SAMPLE_RATE as usize);
        assert!(samples.iter().any(|s| *s > 0.05));
        assert!(samples.iter().all(|s| s.abs() <= 0.1 + f32::EPSILON));
    }

    #[test]
    fn sine_starts_at_zero_crossing() {
        let samples = SineSpec::default().render();
        assert_eq!(samples[0], 0.0);
    }
}
