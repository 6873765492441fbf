//! Chroma (pitch-class energy) extraction
//!
//! Folds a frame's magnitude spectrum into 12 pitch-class bins, all octaves
//! of each pitch class landing in one bin, and averages chroma vectors over
//! a whole buffer.

use crate::error::AnalysisError;

/// A4 (concert pitch) MIDI note number
const MIDI_A4: f32 = 69.0;

/// A4 reference frequency in Hz
const A4_FREQUENCY: f32 = 440.0;

/// Semitones per octave
const SEMITONES_PER_OCTAVE: f32 = 12.0;

/// Lowest frequency folded into the chromagram (A0); bins below carry no
/// usable pitch information at this frame size.
const MIN_PITCHED_FREQUENCY: f32 = 27.5;

/// Fold a magnitude spectrum into a 12-bin pitch-class energy vector.
///
/// Each spectral bin above [`MIN_PITCHED_FREQUENCY`] contributes its energy
/// (magnitude squared) to the bin of its nearest semitone's pitch class,
/// with 0 = C .. 11 = B. The DC bin is skipped.
pub fn chroma_from_spectrum(magnitudes: &[f32], bin_resolution_hz: f32) -> [f32; 12] {
    let mut chroma = [0.0f32; 12];

    for (bin, &mag) in magnitudes.iter().enumerate().skip(1) {
        let freq = bin as f32 * bin_resolution_hz;
        if freq < MIN_PITCHED_FREQUENCY {
            continue;
        }

        // Nearest MIDI note, then mod 12 so that C maps to 0.
        let semitone =
            (MIDI_A4 + SEMITONES_PER_OCTAVE * (freq / A4_FREQUENCY).log2()).round() as i32;
        let pitch_class = semitone.rem_euclid(12) as usize;

        chroma[pitch_class] += mag * mag;
    }

    chroma
}

/// Index-wise arithmetic mean of per-frame chroma vectors.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `frames` is empty — the mean of
/// zero vectors is undefined and must not silently become NaN.
pub fn average_chroma(frames: &[[f32; 12]]) -> Result<[f32; 12], AnalysisError> {
    if frames.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty chroma sequence".to_string(),
        ));
    }

    let mut avg = [0.0f32; 12];
    for frame in frames {
        for (sum, &value) in avg.iter_mut().zip(frame.iter()) {
            *sum += value;
        }
    }

    let count = frames.len() as f32;
    for value in avg.iter_mut() {
        *value /= count;
    }

    Ok(avg)
}
