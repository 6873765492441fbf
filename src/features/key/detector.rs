//! Key detection algorithm
//!
//! Matches an averaged chroma distribution against Krumhansl-Schmuckler
//! templates to detect the musical key of a track.
//!
//! # Reference
//!
//! Krumhansl, C. L. (1990). *Cognitive Foundations of Musical Pitch*.
//! Oxford University Press.

use super::profiles::{MAJOR_PROFILE, MINOR_PROFILE};
use crate::analysis::result::{Key, PitchClass, Scale};

/// Detect the musical key of a time-averaged chroma vector.
///
/// For each of the 12 candidate tonics, the chroma vector is rotated so the
/// tonic sits at index 0 and correlated (Pearson) against both reference
/// profiles. The best of the 24 candidates wins; ties keep the earlier
/// candidate (major is evaluated before minor for each tonic, tonics in
/// ascending pitch-class order).
///
/// # Example
///
/// ```
/// use songprint::features::key::detect_key;
/// use songprint::{PitchClass, Scale};
///
/// // Energy on C, E, G
/// let mut chroma = [0.0f32; 12];
/// chroma[0] = 1.0;
/// chroma[4] = 0.8;
/// chroma[7] = 0.9;
///
/// let key = detect_key(&chroma);
/// assert_eq!(key.note, PitchClass::C);
/// assert_eq!(key.scale, Scale::Major);
/// ```
pub fn detect_key(avg_chroma: &[f32; 12]) -> Key {
    let mut best = Key {
        note: PitchClass::C,
        scale: Scale::Major,
    };
    let mut best_corr = f32::NEG_INFINITY;

    for tonic in 0..12 {
        let mut rotated = [0.0f32; 12];
        for (j, value) in rotated.iter_mut().enumerate() {
            *value = avg_chroma[(tonic + j) % 12];
        }

        let major_corr = pearson_correlation(&rotated, &MAJOR_PROFILE);
        if major_corr > best_corr {
            best_corr = major_corr;
            best = Key {
                note: PitchClass::from_index(tonic),
                scale: Scale::Major,
            };
        }

        let minor_corr = pearson_correlation(&rotated, &MINOR_PROFILE);
        if minor_corr > best_corr {
            best_corr = minor_corr;
            best = Key {
                note: PitchClass::from_index(tonic),
                scale: Scale::Minor,
            };
        }
    }

    log::debug!("Detected key: {} (correlation {:.4})", best.name(), best_corr);

    best
}

/// Pearson correlation coefficient of two 12-element vectors.
///
/// A zero denominator (either vector constant) is treated as 1, so the
/// correlation of a degenerate vector evaluates to 0 instead of raising an
/// arithmetic fault.
fn pearson_correlation(a: &[f32; 12], b: &[f32; 12]) -> f32 {
    let n = a.len() as f32;
    let mean_a = a.iter().sum::<f32>() / n;
    let mean_b = b.iter().sum::<f32>() / n;

    let mut num = 0.0f32;
    let mut den_a = 0.0f32;
    let mut den_b = 0.0f32;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        num += dx * dy;
        den_a += dx * dx;
        den_b += dy * dy;
    }

    let denom = den_a.sqrt() * den_b.sqrt();
    if denom > 0.0 {
        num / denom
    } else {
        num
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chroma with a profile's shape placed so that `tonic` is the root.
    fn rotated_profile(profile: &[f32; 12], tonic: usize) -> [f32; 12] {
        let mut chroma = [0.0f32; 12];
        for (j, &value) in profile.iter().enumerate() {
            chroma[(tonic + j) % 12] = value;
        }
        chroma
    }

    #[test]
    fn test_major_profile_recovers_exact_tonic() {
        for tonic in 0..12 {
            let chroma = rotated_profile(&MAJOR_PROFILE, tonic);
            let key = detect_key(&chroma);
            assert_eq!(key.note, PitchClass::from_index(tonic));
            assert_eq!(key.scale, Scale::Major);
        }
    }

    #[test]
    fn test_minor_profile_recovers_exact_tonic() {
        for tonic in 0..12 {
            let chroma = rotated_profile(&MINOR_PROFILE, tonic);
            let key = detect_key(&chroma);
            assert_eq!(key.note, PitchClass::from_index(tonic));
            assert_eq!(key.scale, Scale::Minor);
        }
    }

    #[test]
    fn test_c_major_scale_degrees() {
        let chroma = [1.0, 0.0, 0.5, 0.0, 0.8, 0.6, 0.0, 0.9, 0.0, 0.5, 0.0, 0.3];
        let key = detect_key(&chroma);
        assert_eq!(key.note, PitchClass::C);
        assert_eq!(key.scale, Scale::Major);
    }

    #[test]
    fn test_constant_chroma_falls_back_to_first_candidate() {
        // Zero variance makes every correlation 0; the strict-improvement
        // rule keeps the first candidate evaluated, C major.
        let chroma = [0.5f32; 12];
        let key = detect_key(&chroma);
        assert_eq!(key.note, PitchClass::C);
        assert_eq!(key.scale, Scale::Major);
    }

    #[test]
    fn test_pearson_self_correlation_is_one() {
        let corr = pearson_correlation(&MAJOR_PROFILE, &MAJOR_PROFILE);
        assert!((corr - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pearson_degenerate_input_is_zero() {
        let constant = [0.7f32; 12];
        assert_eq!(pearson_correlation(&constant, &MAJOR_PROFILE), 0.0);
    }
}
