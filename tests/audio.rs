use std::path::PathBuf;

use indic_speech::audio::{read_wav_samples, write_sine_wav, write_wav_samples, SineSpec};
use indic_speech::AsrError;

#[test]
fn reads_pcm16_mono_16khz_wav() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_test_wav(&dir, 16_000, &[0, 1000, -1000, 250]);

    let samples = read_wav_samples(&path).expect("wav should load");

    assert_eq!(samples.len(), 4);
    assert!(samples[1] > 0.0);
    assert!(samples[2] < 0.0);
}

#[test]
fn rejects_non_16khz_wav() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_test_wav(&dir, 8_000, &[0, 100, -100, 50]);

    let error = read_wav_samples(&path).expect_err("8kHz input must fail");

    assert!(matches!(error, AsrError::InvalidAudio(_)));
    assert!(error.to_string().contains("16000"));
}

#[test]
fn missing_file_is_a_distinct_error() {
    let error = read_wav_samples("no_such_file.wav".as_ref())
        .expect_err("missing file must fail");

    assert!(matches!(error, AsrError::AudioNotFound(_)));
    assert!(error.to_string().contains("no_such_file.wav"));
}

#[test]
fn sine_fixture_is_a_valid_16khz_wav() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fixture.wav");

    let spec = SineSpec::default();
    write_sine_wav(&path, &spec).expect("fixture should be written");

    let samples = read_wav_samples(&path).expect("fixture should load back");
    assert_eq!(samples.len(), spec.sample_count());
    assert!(samples.iter().any(|s| s.abs() > 0.05));
}

#[test]
fn write_then_read_round_trips_signs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("roundtrip.wav");

    write_wav_samples(&path, &[0.0, 0.5, -0.5, 1.5]).expect("wav should be written");
    let samples = read_wav_samples(&path).expect("wav should load back");

    assert_eq!(samples.len(), 4);
    assert!(samples[1] > 0.4 && samples[1] < 0.6);
    assert!(samples[2] < -0.4 && samples[2] > -0.6);
    // Out-of-range input is clamped, not wrapped.
    assert!(samples[3] > 0.99);
}

fn write_test_wav(dir: &tempfile::TempDir, sample_rate: u32, samples: &[i16]) -> PathBuf {
    let path = dir.path().join("input.wav");

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec).expect("wav file should be created");
    for sample in samples {
        writer
            .write_sample(*sample)
            .expect("sample should be written");
    }
    writer.finalize().expect("wav should be finalized");

    path
}
