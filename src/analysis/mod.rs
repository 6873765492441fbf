//! Analysis result types
//!
//! The vocabulary of the final fingerprint: key, energy band, timbre band,
//! and the assembled `AudioAnalysis` record.

pub mod result;

pub use result::{AudioAnalysis, EnergyLevel, Key, PitchClass, Scale, Timbre};
