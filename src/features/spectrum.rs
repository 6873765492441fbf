//! Frame spectrum computation
//!
//! Hann-windowed FFT magnitudes for one frame, plus the spectral centroid
//! derived from them.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::f32::consts::PI;
use std::sync::Arc;

/// Reusable spectrum analyzer for fixed-size frames.
///
/// Plans the FFT and window once; `magnitudes` is then called once per frame.
pub struct FrameSpectrum {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    bin_resolution_hz: f32,
}

impl FrameSpectrum {
    /// Create an analyzer for frames of `frame_size` samples at `sample_rate` Hz.
    pub fn new(frame_size: usize, sample_rate: u32) -> Self {
        let mut planner = FftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(frame_size);
        Self {
            fft,
            window: hann_window(frame_size),
            bin_resolution_hz: sample_rate as f32 / frame_size as f32,
        }
    }

    /// Frequency spacing between adjacent bins in Hz.
    pub fn bin_resolution_hz(&self) -> f32 {
        self.bin_resolution_hz
    }

    /// Magnitude spectrum of one frame (bins 0 .. frame_size/2).
    ///
    /// `frame` must have exactly the frame size this analyzer was planned for.
    pub fn magnitudes(&self, frame: &[f32]) -> Vec<f32> {
        debug_assert_eq!(frame.len(), self.window.len());

        let mut buffer: Vec<Complex<f32>> = frame
            .iter()
            .zip(self.window.iter())
            .map(|(&s, &w)| Complex::new(s * w, 0.0))
            .collect();
        self.fft.process(&mut buffer);

        buffer[..buffer.len() / 2].iter().map(|c| c.norm()).collect()
    }
}

/// Magnitude-weighted mean frequency of a spectrum, in Hz.
///
/// Returns 0.0 for an all-zero spectrum (silence) instead of dividing by zero.
pub fn spectral_centroid(magnitudes: &[f32], bin_resolution_hz: f32) -> f32 {
    let total: f32 = magnitudes.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let weighted: f32 = magnitudes
        .iter()
        .enumerate()
        .map(|(bin, &mag)| bin as f32 * bin_resolution_hz * mag)
        .sum();

    weighted / total
}

fn hann_window(size: usize) -> Vec<f32> {
    let denom = size.saturating_sub(1).max(1) as f32;
    (0..size)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f32 / denom).cos()))
        .collect()
}
