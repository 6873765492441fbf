//! Example: Fingerprint a WAV file
//!
//! Decodes a WAV file with hound, takes channel 0, and prints the
//! fingerprint both as a human-readable report and as JSON.
//!
//! Usage: cargo run --example analyze_file -- path/to/track.wav

use songprint::{analyze, AnalysisConfig, SampleBuffer};

/// Load a WAV file and return (channel 0 samples, sample rate)
fn load_wav(path: &str) -> Result<(Vec<f32>, u32), Box<dyn std::error::Error>> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    // Analysis is single-channel: keep channel 0 of interleaved audio
    let channels = spec.channels as usize;
    let mono: Vec<f32> = samples.iter().step_by(channels).copied().collect();

    Ok((mono, spec.sample_rate))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: analyze_file <path/to/track.wav>")?;

    let (samples, sample_rate) = load_wav(&path)?;
    let buffer = SampleBuffer::new(samples, sample_rate)?;

    let fingerprint = analyze(&buffer, AnalysisConfig::default())?;

    println!("Analysis results for {}:", path);
    println!("  BPM:      {}", fingerprint.bpm);
    println!("  Key:      {}", fingerprint.key.name());
    println!("  Energy:   {:?}", fingerprint.energy);
    println!("  Timbre:   {:?}", fingerprint.timbre);
    println!("  Duration: {:.2} s", fingerprint.duration_seconds);
    println!();
    println!("{}", serde_json::to_string_pretty(&fingerprint)?);

    Ok(())
}
