use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::Result;

/// One decoded chunk of 16-bit PCM audio.
///
/// The samples and the sum of their absolute values are produced by the same
/// decode pass, so the two always describe the same data. The chunk is owned
/// exclusively by the caller after decoding and is never mutated by the
/// estimators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcmChunk {
    samples: Vec<i16>,
    abs_sum: u64,
}

impl PcmChunk {
    /// Returns the decoded samples in buffer order.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Returns the sum of the absolute values of all samples.
    pub fn abs_sum(&self) -> u64 {
        self.abs_sum
    }

    /// Returns the number of samples in the chunk.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` when the chunk contains no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the largest absolute sample value in the chunk, or 0 when the
    /// chunk is empty. `i16::MIN` maps to 32768, which is why the result is
    /// wider than `u16::MAX / 2`.
    pub fn peak_magnitude(&self) -> u32 {
        self.samples
            .iter()
            .map(|sample| u32::from(sample.unsigned_abs()))
            .max()
            .unwrap_or(0)
    }

    /// Returns the mean absolute sample value, or 0.0 when the chunk is
    /// empty. Together with [`PcmChunk::peak_magnitude`] this lets callers
    /// choose between mean and peak semantics for the dBFS mapping.
    pub fn mean_magnitude(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.abs_sum as f64 / self.samples.len() as f64
        }
    }
}

/// Decodes a base64-encoded buffer of little-endian 16-bit PCM.
///
/// Fails only when the input is not valid base64; the byte content itself is
/// decoded as-is. See [`decode_bytes`] for the byte-level contract.
pub fn decode_base64(encoded: &str) -> Result<PcmChunk> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(decode_bytes(&bytes))
}

/// Reinterprets raw bytes as little-endian signed 16-bit samples.
///
/// Consecutive byte pairs become one sample each; a trailing odd byte is
/// dropped. The absolute-value sum is accumulated in the same pass that
/// builds the sample vector.
pub fn decode_bytes(bytes: &[u8]) -> PcmChunk {
    let mut samples = Vec::with_capacity(bytes.len() / 2);
    let mut abs_sum = 0u64;

    for pair in bytes.chunks_exact(2) {
        let sample = i16::from_le_bytes([pair[0], pair[1]]);
        abs_sum += u64::from(sample.unsigned_abs());
        samples.push(sample);
    }

    PcmChunk { samples, abs_sum }
}
