//! Audio input modules
//!
//! The engine consumes already-decoded mono samples; file decoding belongs to
//! the caller (see `demos/analyze_file.rs` for a WAV loader).

pub mod sample_buffer;

pub use sample_buffer::SampleBuffer;
