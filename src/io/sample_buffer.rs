//! Owned sample buffer for one analysis call

use crate::error::AnalysisError;

/// A fully materialized, single-channel audio signal.
///
/// The buffer owns its samples and is read-only for the duration of one
/// analysis call. Streaming input is deliberately unsupported.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Create a buffer from decoded mono samples.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `samples` is empty or
    /// `sample_rate` is zero.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, AnalysisError> {
        if samples.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "Empty audio samples".to_string(),
            ));
        }
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "Invalid sample rate".to_string(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Sample data.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples. Always false for a constructed buffer.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total duration in seconds.
    pub fn duration_seconds(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Iterate over fixed-size frames starting at offsets `0, hop, 2*hop, ...`.
    ///
    /// A trailing frame shorter than `frame_size` is dropped.
    pub fn frames(&self, frame_size: usize, hop_size: usize) -> impl Iterator<Item = &[f32]> + '_ {
        self.samples.windows(frame_size).step_by(hop_size.max(1))
    }
}
