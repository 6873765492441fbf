//! Tempo estimation from per-frame energy
//!
//! Finds onset peaks in the RMS sequence and converts the mean inter-peak
//! interval to BPM. This is an onset-density proxy for tempo, not beat
//! tracking: the threshold and debounce window trade precision for
//! robustness on arbitrary material, and the constants below are part of
//! the output contract.

/// Peaks must exceed this fraction of the maximum RMS value
pub const PEAK_THRESHOLD_RATIO: f32 = 0.5;

/// Minimum distance between accepted peaks, in frame indices
///
/// A single onset smeared across adjacent frames would otherwise be counted
/// twice.
pub const PEAK_DEBOUNCE_FRAMES: usize = 10;

/// BPM returned when fewer than 2 peaks are found
pub const FALLBACK_BPM: u32 = 120;

/// Lower clamp bound for the BPM estimate
pub const MIN_BPM: u32 = 40;

/// Upper clamp bound for the BPM estimate
pub const MAX_BPM: u32 = 220;

/// Find onset peaks in a per-frame RMS sequence.
///
/// A peak is an interior local maximum strictly greater than half the
/// sequence maximum and strictly greater than both neighbors. A candidate
/// within [`PEAK_DEBOUNCE_FRAMES`] of the previously accepted peak is
/// rejected. Returned indices are strictly increasing.
pub fn find_onset_peaks(rms: &[f32]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if rms.len() < 3 {
        return peaks;
    }

    let max_rms = rms.iter().copied().fold(0.0f32, f32::max);
    let threshold = max_rms * PEAK_THRESHOLD_RATIO;

    for i in 1..rms.len() - 1 {
        if rms[i] > threshold && rms[i] > rms[i - 1] && rms[i] > rms[i + 1] {
            match peaks.last() {
                Some(&last) if i - last <= PEAK_DEBOUNCE_FRAMES => {}
                _ => peaks.push(i),
            }
        }
    }

    peaks
}

/// Estimate tempo in BPM from a per-frame RMS sequence.
///
/// Averages the intervals between accepted onset peaks, converts frames to
/// seconds via `hop_size / sample_rate`, and inverts to beats per minute.
/// With fewer than 2 peaks there is no interval to measure and the fixed
/// fallback of 120 BPM is returned. The result is always clamped to
/// [40, 220].
pub fn estimate_bpm(rms: &[f32], sample_rate: u32, hop_size: usize) -> u32 {
    let peaks = find_onset_peaks(rms);

    if peaks.len() < 2 {
        log::debug!(
            "Tempo under-determined ({} peaks), falling back to {} BPM",
            peaks.len(),
            FALLBACK_BPM
        );
        return FALLBACK_BPM;
    }

    let interval_sum: f32 = peaks.windows(2).map(|w| (w[1] - w[0]) as f32).sum();
    let avg_interval = interval_sum / (peaks.len() - 1) as f32;

    let seconds_per_beat = avg_interval * hop_size as f32 / sample_rate as f32;
    let bpm = (60.0 / seconds_per_beat).round() as u32;

    log::debug!(
        "Tempo: {} peaks, avg interval {:.2} frames, {} BPM before clamp",
        peaks.len(),
        avg_interval,
        bpm
    );

    bpm.clamp(MIN_BPM, MAX_BPM)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RMS sequence of `len` near-silent frames with unit spikes at `spikes`.
    fn spiky_rms(len: usize, spikes: &[usize]) -> Vec<f32> {
        let mut rms = vec![0.01f32; len];
        for &i in spikes {
            rms[i] = 1.0;
        }
        rms
    }

    #[test]
    fn test_flat_sequence_has_no_peaks() {
        let rms = vec![0.2f32; 100];
        assert!(find_onset_peaks(&rms).is_empty());
    }

    #[test]
    fn test_spikes_are_found() {
        let rms = spiky_rms(100, &[5, 48, 91]);
        assert_eq!(find_onset_peaks(&rms), vec![5, 48, 91]);
    }

    #[test]
    fn test_debounce_merges_close_spikes() {
        // Spikes at 5 and 8 are 3 frames apart: one onset, not two.
        let mut rms = spiky_rms(40, &[5]);
        rms[8] = 0.9;
        assert_eq!(find_onset_peaks(&rms), vec![5]);
    }

    #[test]
    fn test_spikes_just_past_debounce_both_count() {
        // 11 frames apart is strictly more than the 10-frame window.
        let rms = spiky_rms(40, &[5, 16]);
        assert_eq!(find_onset_peaks(&rms), vec![5, 16]);
    }

    #[test]
    fn test_endpoints_are_not_peaks() {
        let rms = spiky_rms(40, &[0, 39]);
        assert!(find_onset_peaks(&rms).is_empty());
    }

    #[test]
    fn test_sub_threshold_spikes_ignored() {
        let mut rms = spiky_rms(100, &[5]);
        rms[50] = 0.4; // below 0.5 * max
        assert_eq!(find_onset_peaks(&rms), vec![5]);
    }

    #[test]
    fn test_fallback_on_flat_sequence() {
        let rms = vec![0.2f32; 200];
        assert_eq!(estimate_bpm(&rms, 44100, 512), 120);
    }

    #[test]
    fn test_fallback_on_single_peak() {
        let rms = spiky_rms(100, &[50]);
        assert_eq!(estimate_bpm(&rms, 44100, 512), 120);
    }

    #[test]
    fn test_fallback_on_short_sequence() {
        assert_eq!(estimate_bpm(&[0.5, 1.0], 44100, 512), 120);
    }

    #[test]
    fn test_known_interval_maps_to_120_bpm() {
        // 43 frames * 512 samples / 44100 Hz = 0.4993 s per beat
        let rms = spiky_rms(200, &[5, 48, 91, 134, 177]);
        assert_eq!(estimate_bpm(&rms, 44100, 512), 120);
    }

    #[test]
    fn test_fast_intervals_clamped_to_max() {
        // 11-frame intervals = ~470 BPM raw
        let rms = spiky_rms(60, &[5, 16, 27, 38, 49]);
        assert_eq!(estimate_bpm(&rms, 44100, 512), 220);
    }

    #[test]
    fn test_slow_intervals_clamped_to_min() {
        // 150-frame intervals = ~34 BPM raw
        let rms = spiky_rms(400, &[5, 155, 305]);
        assert_eq!(estimate_bpm(&rms, 44100, 512), 40);
    }

    #[test]
    fn test_estimate_always_within_clamp_range() {
        let sequences: [&[usize]; 4] = [&[1, 13], &[5, 48, 91], &[5, 200], &[10, 21, 32, 43]];
        for spikes in sequences {
            let rms = spiky_rms(400, spikes);
            let bpm = estimate_bpm(&rms, 44100, 512);
            assert!((40..=220).contains(&bpm), "BPM {} out of range", bpm);
        }
    }
}
