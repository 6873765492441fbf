//! Configuration parameters for audio analysis

use crate::error::AnalysisError;

/// Analysis configuration parameters
///
/// The defaults are part of the observable output contract: fingerprints are
/// only comparable across runs that used the same frame and hop sizes.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisConfig {
    /// Frame size in samples (default: 512)
    ///
    /// A trailing frame shorter than this is dropped, not padded.
    pub frame_size: usize,

    /// Hop size in samples between frame starts (default: 512)
    ///
    /// Equal to `frame_size` by default, i.e. contiguous non-overlapping frames.
    pub hop_size: usize,
}

impl AnalysisConfig {
    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.frame_size == 0 {
            return Err(AnalysisError::InvalidConfig(
                "Frame size must be > 0".to_string(),
            ));
        }
        if self.hop_size == 0 {
            return Err(AnalysisError::InvalidConfig(
                "Hop size must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_size: 512,
            hop_size: 512,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_size, 512);
        assert_eq!(config.hop_size, 512);
    }

    #[test]
    fn test_zero_frame_size_rejected() {
        let config = AnalysisConfig {
            frame_size: 0,
            hop_size: 512,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_hop_size_rejected() {
        let config = AnalysisConfig {
            frame_size: 512,
            hop_size: 0,
        };
        assert!(config.validate().is_err());
    }
}
