//! Demo: transcribe a WAV file with one of the Indic checkpoints.
//!
//! ```text
//! indic-demo                    # sine-wave smoke test over all languages
//! indic-demo hi speech.wav      # transcribe one file as Hindi
//! indic-demo ta speech.wav --json
//! ```

use std::path::{Path, PathBuf};

use indic_speech::audio::{write_sine_wav, SineSpec};
use indic_speech::{IndicAsr, Language};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = if let Some(pos) = args.iter().position(|a| a == "--json") {
        args.remove(pos);
        true
    } else {
        false
    };

    match args.as_slice() {
        [] => smoke_test(),
        [code, wav] => transcribe_one(code, Path::new(wav), as_json),
        _ => {
            eprintln!("usage: indic-demo [LANG WAV] [--json]");
            std::process::exit(2);
        }
    }
}

fn transcribe_one(code: &str, wav_path: &Path, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut asr = IndicAsr::from_code(code)?;
    let result = asr.transcribe_file(wav_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", result.text);
    if let Some(segments) = result.segments {
        for segment in segments {
            println!(
                "[{:.2}s - {:.2}s] {}",
                segment.start, segment.end, segment.text
            );
        }
    }

    Ok(())
}

/// Generate the sine fixture and run every language over it, then clean up.
fn smoke_test() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = PathBuf::from("test_audio.wav");
    write_sine_wav(&fixture, &SineSpec::default())?;
    println!("created test audio file: {}", fixture.display());

    for language in Language::ALL {
        println!("--- {} ---", language.code());
        match IndicAsr::new(language) {
            Ok(mut asr) => match asr.transcribe_file(&fixture) {
                Ok(result) => println!("transcription ({language}): {}", result.text),
                Err(err) => eprintln!("transcription failed ({language}): {err}"),
            },
            Err(err) => eprintln!("model load failed ({language}): {err}"),
        }
    }

    std::fs::remove_file(&fixture)?;
    println!("cleaned up {}", fixture.display());
    Ok(())
}
