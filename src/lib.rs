//! # Songprint
//!
//! A compact audio fingerprint engine: turns a decoded mono signal into
//! tempo, key, energy band, and timbre band.
//!
//! ## Features
//!
//! - **Tempo estimation**: onset-peak detection over per-frame RMS with
//!   inter-peak interval averaging
//! - **Key detection**: chroma analysis with Krumhansl-Schmuckler template
//!   correlation
//! - **Energy / timbre bands**: threshold classification of mean RMS and
//!   mean spectral centroid
//!
//! ## Quick Start
//!
//! ```
//! use songprint::{analyze, AnalysisConfig, SampleBuffer};
//!
//! // Decoded mono samples, normalized to [-1.0, 1.0]
//! let samples = vec![0.0f32; 44100 * 5];
//! let buffer = SampleBuffer::new(samples, 44100)?;
//!
//! let fingerprint = analyze(&buffer, AnalysisConfig::default())?;
//!
//! println!("BPM: {}", fingerprint.bpm);
//! println!("Key: {}", fingerprint.key.name());
//! # Ok::<(), songprint::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline flows one way:
//!
//! ```text
//! Samples → Frame Features (RMS / chroma / centroid) → Aggregates → Fingerprint
//! ```
//!
//! The whole pipeline is a pure function of the input buffer: no state is
//! held between calls, nothing blocks, and identical input yields an
//! identical fingerprint.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;

// Re-export main types
pub use analysis::result::{AudioAnalysis, EnergyLevel, Key, PitchClass, Scale, Timbre};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use io::SampleBuffer;

use features::chroma::average_chroma;
use features::classify::{classify_energy, classify_timbre};
use features::extractor::extract_frame_features;
use features::key::detect_key;
use features::tempo::estimate_bpm;

/// Analyze a sample buffer into an audio fingerprint.
///
/// Runs frame feature extraction over the whole buffer, aggregates the
/// per-frame features, and derives tempo, key, energy band, and timbre band.
///
/// # Arguments
///
/// * `buffer` - Decoded mono samples with their sample rate
/// * `config` - Frame and hop sizes (the defaults are the compatible contract)
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the buffer is shorter than one
/// frame, and `AnalysisError::InvalidConfig` for zero frame or hop sizes.
/// Degenerate signals (silence, constant amplitude) are not errors; they
/// resolve through the documented fallbacks.
///
/// # Example
///
/// ```
/// use songprint::{analyze, AnalysisConfig, SampleBuffer};
///
/// let buffer = SampleBuffer::new(vec![0.25f32; 44100], 44100)?;
/// let fingerprint = analyze(&buffer, AnalysisConfig::default())?;
/// assert!((40..=220).contains(&fingerprint.bpm));
/// # Ok::<(), songprint::AnalysisError>(())
/// ```
pub fn analyze(
    buffer: &SampleBuffer,
    config: AnalysisConfig,
) -> Result<AudioAnalysis, AnalysisError> {
    config.validate()?;

    log::debug!(
        "Starting analysis: {} samples at {} Hz ({:.2} s)",
        buffer.len(),
        buffer.sample_rate(),
        buffer.duration_seconds()
    );

    if buffer.len() < config.frame_size {
        return Err(AnalysisError::InvalidInput(format!(
            "Buffer holds {} samples, need at least one full frame of {}",
            buffer.len(),
            config.frame_size
        )));
    }

    let features = extract_frame_features(buffer, &config)?;
    if features.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "No frames extracted from buffer".to_string(),
        ));
    }

    let frame_count = features.len() as f32;
    let mean_rms = features.rms.iter().sum::<f32>() / frame_count;
    let mean_centroid = features.centroid.iter().sum::<f32>() / frame_count;
    let avg_chroma = average_chroma(&features.chroma)?;

    let bpm = estimate_bpm(&features.rms, buffer.sample_rate(), config.hop_size);
    let key = detect_key(&avg_chroma);
    let energy = classify_energy(mean_rms);
    let timbre = classify_timbre(mean_centroid);

    log::debug!(
        "Analysis complete: {} BPM, key {}, energy {:?}, timbre {:?}",
        bpm,
        key.name(),
        energy,
        timbre
    );

    Ok(AudioAnalysis {
        bpm,
        key,
        energy,
        timbre,
        duration_seconds: buffer.duration_seconds(),
    })
}
