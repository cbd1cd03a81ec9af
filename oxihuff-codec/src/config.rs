//! Codec configuration.

use oxihuff_core::DEFAULT_BUFFER_SIZE;

/// Buffer configuration shared by the encoder and decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Size in bytes of the input and output buffers.
    pub buffer_size: usize,
}

impl CodecConfig {
    /// Default configuration (1 KiB buffers).
    pub const DEFAULT: Self = Self {
        buffer_size: DEFAULT_BUFFER_SIZE,
    };

    /// Create a configuration with the given buffer size (minimum 1 byte).
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(CodecConfig::default().buffer_size, 1024);
        assert_eq!(CodecConfig::default(), CodecConfig::DEFAULT);
    }

    #[test]
    fn test_buffer_size_clamped() {
        assert_eq!(CodecConfig::new(0).buffer_size, 1);
        assert_eq!(CodecConfig::new(4096).buffer_size, 4096);
    }
}
