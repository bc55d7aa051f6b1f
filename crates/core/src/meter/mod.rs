use serde::{Deserialize, Serialize};

use crate::{dbfs::dbfs, decode, power::power_level, PcmChunk, Result};

/// Scalar loudness summary of one audio chunk.
///
/// This is what a UI meter or visualisation consumes per buffer: the
/// perceptual 0–100 level plus dBFS under both peak and mean semantics, so
/// the caller can pick whichever suits its display. Frames carry no
/// identity and are recomputed from scratch for every chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterFrame {
    pub sample_count: usize,
    pub power_level: u8,
    pub peak_dbfs: i32,
    pub mean_dbfs: i32,
}

impl MeterFrame {
    /// Derives all loudness metrics from an already-decoded chunk.
    pub fn from_chunk(chunk: &PcmChunk) -> Self {
        Self {
            sample_count: chunk.len(),
            power_level: power_level(chunk.abs_sum(), chunk.len()),
            peak_dbfs: dbfs(f64::from(chunk.peak_magnitude())),
            mean_dbfs: dbfs(chunk.mean_magnitude()),
        }
    }
}

/// Decodes a base64-encoded PCM chunk and meters it in one call.
///
/// Convenience for callers that do not need the sample data itself. Fails
/// only on invalid base64, like [`decode::decode_base64`].
pub fn meter_base64(encoded: &str) -> Result<MeterFrame> {
    let chunk = decode::decode_base64(encoded)?;
    Ok(MeterFrame::from_chunk(&chunk))
}
