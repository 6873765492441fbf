//! Krumhansl-Schmuckler key profiles
//!
//! Reference pitch-class salience for a tonic-rooted diatonic scale, indexed
//! from the tonic (element 0) upward in semitones. Process-wide constants;
//! the exact values are part of the output contract.

/// Major key profile (tonic at index 0)
pub const MAJOR_PROFILE: [f32; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor key profile (tonic at index 0)
pub const MINOR_PROFILE: [f32; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];
