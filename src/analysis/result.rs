//! Analysis result types

use serde::{Deserialize, Serialize};

/// Pitch class of a tonic (0 = C .. 11 = B, chromatic, sharps only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    /// C
    C,
    /// C#
    #[serde(rename = "C#")]
    CSharp,
    /// D
    D,
    /// D#
    #[serde(rename = "D#")]
    DSharp,
    /// E
    E,
    /// F
    F,
    /// F#
    #[serde(rename = "F#")]
    FSharp,
    /// G
    G,
    /// G#
    #[serde(rename = "G#")]
    GSharp,
    /// A
    A,
    /// A#
    #[serde(rename = "A#")]
    ASharp,
    /// B
    B,
}

impl PitchClass {
    const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Pitch class from a chromatic index; indices wrap modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Chromatic index (0 = C .. 11 = B).
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// Note name (e.g., "C", "F#").
    pub fn name(&self) -> &'static str {
        const NOTE_NAMES: [&str; 12] = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        NOTE_NAMES[self.index()]
    }
}

/// Major or minor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Major mode
    Major,
    /// Minor mode
    Minor,
}

/// Musical key: a tonic pitch class plus a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    /// Tonic pitch class
    pub note: PitchClass,
    /// Major or minor
    pub scale: Scale,
}

impl Key {
    /// Key name in compact musical notation.
    ///
    /// Major keys render as the note name, minor keys with an "m" suffix:
    ///
    /// ```
    /// use songprint::{Key, PitchClass, Scale};
    ///
    /// assert_eq!(Key { note: PitchClass::C, scale: Scale::Major }.name(), "C");
    /// assert_eq!(Key { note: PitchClass::A, scale: Scale::Minor }.name(), "Am");
    /// assert_eq!(Key { note: PitchClass::FSharp, scale: Scale::Minor }.name(), "F#m");
    /// ```
    pub fn name(&self) -> String {
        match self.scale {
            Scale::Major => self.note.name().to_string(),
            Scale::Minor => format!("{}m", self.note.name()),
        }
    }
}

/// Overall loudness band of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    /// Mean RMS below 0.1
    Low,
    /// Mean RMS in [0.1, 0.25)
    Medium,
    /// Mean RMS at or above 0.25
    High,
}

/// Spectral brightness band of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timbre {
    /// Mean spectral centroid below 1500 Hz
    Warm,
    /// Mean spectral centroid in [1500, 4000) Hz
    Neutral,
    /// Mean spectral centroid at or above 4000 Hz
    Bright,
}

/// Complete audio fingerprint
///
/// A pure function of the input buffer: analyzing the same samples twice
/// yields an equal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioAnalysis {
    /// Tempo estimate in beats per minute, clamped to [40, 220]
    pub bpm: u32,

    /// Detected key
    pub key: Key,

    /// Energy band
    pub energy: EnergyLevel,

    /// Timbre band
    pub timbre: Timbre,

    /// Audio duration in seconds
    pub duration_seconds: f32,
}
