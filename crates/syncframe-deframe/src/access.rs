use syncframe_bits::bytes_to_bits;

use crate::error::DeframeError;

/// Default 64-bit access code pattern.
pub const DEFAULT_ACCESS_CODE: [u8; 8] = [0xAC, 0xDD, 0xA4, 0xE2, 0xF2, 0x8C, 0x20, 0xFC];

/// The fixed 64-bit pattern used to verify frame alignment.
///
/// Set at construction, never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessCode([u8; 8]);

impl AccessCode {
    /// Access code length in bytes.
    pub const LEN: usize = 8;

    /// Access code length in bits.
    pub const BITS: usize = Self::LEN * 8;

    pub fn new(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Expand to 64 MSB-first bit values for streaming comparison.
    pub fn bit_pattern(&self) -> [u8; Self::BITS] {
        let mut bits = [0u8; Self::BITS];
        bits.copy_from_slice(&bytes_to_bits(&self.0));
        bits
    }
}

impl Default for AccessCode {
    fn default() -> Self {
        Self(DEFAULT_ACCESS_CODE)
    }
}

impl TryFrom<&[u8]> for AccessCode {
    type Error = DeframeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] =
            bytes
                .try_into()
                .map_err(|_| DeframeError::InvalidAccessCodeLength {
                    len: bytes.len(),
                    expected: Self::LEN,
                })?;
        Ok(Self(arr))
    }
}
