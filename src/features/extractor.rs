//! Per-frame feature extraction
//!
//! Slices a sample buffer into fixed-size contiguous frames and computes
//! RMS, chroma, and spectral centroid for each one.

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::chroma::chroma_from_spectrum;
use crate::features::spectrum::{spectral_centroid, FrameSpectrum};
use crate::features::FrameFeatureSeries;
use crate::io::SampleBuffer;

/// Extract per-frame features for the whole buffer.
///
/// Frames start at offsets `0, hop, 2*hop, ...`; a trailing frame shorter
/// than `frame_size` is dropped. A buffer shorter than one frame yields an
/// empty series — the caller decides whether that is an error.
///
/// RMS is computed on the raw frame; chroma and centroid come from the
/// Hann-windowed magnitude spectrum.
pub fn extract_frame_features(
    buffer: &SampleBuffer,
    config: &AnalysisConfig,
) -> Result<FrameFeatureSeries, AnalysisError> {
    config.validate()?;

    let samples = buffer.samples();
    let frame_count = if samples.len() >= config.frame_size {
        (samples.len() - config.frame_size) / config.hop_size + 1
    } else {
        0
    };

    log::debug!(
        "Extracting features: {} samples, frame={}, hop={}, {} frames",
        samples.len(),
        config.frame_size,
        config.hop_size,
        frame_count
    );

    let mut series = FrameFeatureSeries::with_capacity(frame_count);
    if frame_count == 0 {
        return Ok(series);
    }

    let spectrum = FrameSpectrum::new(config.frame_size, buffer.sample_rate());

    for frame in buffer.frames(config.frame_size, config.hop_size) {
        series.rms.push(frame_rms(frame));

        let magnitudes = spectrum.magnitudes(frame);
        series
            .chroma
            .push(chroma_from_spectrum(&magnitudes, spectrum.bin_resolution_hz()));
        series
            .centroid
            .push(spectral_centroid(&magnitudes, spectrum.bin_resolution_hz()));
    }

    Ok(series)
}

/// Root-mean-square amplitude of one frame.
fn frame_rms(frame: &[f32]) -> f32 {
    let sum_sq: f32 = frame.iter().map(|&x| x * x).sum();
    (sum_sq / frame.len() as f32).sqrt()
}
