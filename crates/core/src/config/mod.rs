use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Configuration of the native capture subsystem that feeds this core.
///
/// These values are owned and interpreted by the capture collaborator; the
/// core carries them as opaque context, except that the decoder assumes
/// 16-bit little-endian samples. Defaults match the native recording
/// module's option block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub sample_rate: u32,
    pub channels: u8,
    pub bits_per_sample: u8,
    pub buffer_size: usize,
    pub speaker_phone_on: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 1,
            bits_per_sample: 16,
            buffer_size: 2048,
            speaker_phone_on: false,
        }
    }
}

impl CaptureConfig {
    /// Loads a configuration from a JSON file. Missing fields fall back to
    /// the capture defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Whether the decode path understands buffers produced under this
    /// configuration. 8-bit capture would need a second decode path.
    pub fn is_supported(&self) -> bool {
        self.bits_per_sample == 16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_native_module() {
        let config = CaptureConfig::default();

        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.channels, 1);
        assert_eq!(config.bits_per_sample, 16);
        assert_eq!(config.buffer_size, 2048);
        assert!(!config.speaker_phone_on);
        assert!(config.is_supported());
    }

    #[test]
    fn eight_bit_capture_is_not_supported() {
        let config = CaptureConfig {
            bits_per_sample: 8,
            ..CaptureConfig::default()
        };
        assert!(!config.is_supported());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: CaptureConfig =
            serde_json::from_str(r#"{"sample_rate": 32000, "buffer_size": 4096}"#).unwrap();

        assert_eq!(config.sample_rate, 32_000);
        assert_eq!(config.buffer_size, 4096);
        assert_eq!(config.channels, 1);
        assert_eq!(config.bits_per_sample, 16);
    }

    #[test]
    fn loads_from_a_json_file() {
        let path = std::env::temp_dir().join("audio-level-capture-config-test.json");
        std::fs::write(&path, r#"{"channels": 2}"#).unwrap();

        let config = CaptureConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.channels, 2);
        assert_eq!(config.sample_rate, 44_100);
    }
}
