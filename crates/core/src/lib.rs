//! Loudness metering core for live PCM audio streams.
//!
//! The crate takes one base64-encoded chunk of raw 16-bit little-endian PCM
//! at a time and reduces it to scalar loudness summaries: a perceptually
//! scaled 0–100 power level for UI meters and a dBFS value for
//! audio-engineering displays. Every operation is a pure, stateless
//! transformation of its inputs, so a capture pipeline can call into the
//! crate from any thread without synchronisation. Capture itself, event
//! dispatch and rendering live in the host application, not here.

pub mod config;
pub mod dbfs;
pub mod decode;
pub mod error;
pub mod meter;
pub mod power;

pub use config::CaptureConfig;
pub use dbfs::{dbfs, FULL_SCALE};
pub use decode::{decode_base64, decode_bytes, PcmChunk};
pub use error::{AudioLevelError, Result};
pub use meter::{meter_base64, MeterFrame};
pub use power::power_level;
