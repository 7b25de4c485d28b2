//! Parameter-block construction.
//!
//! Wire layout (RFC 7693 section 2.5, BLAKE2s, sequential mode):
//! - word 0: digest length | key length << 8 | fan-out << 16 | depth << 24
//! - word 1: leaf length (always 0)
//! - words 2-3: node offset (always 0)
//! - words 4-5: salt, 8 bytes as two little-endian words
//! - words 6-7: personalization, same packing
//!
//! The engine seeds its state with `IV[i] ^ words[i]` before the first block.

#![forbid(unsafe_code)]

use crate::config::HashConfig;
use blake2s_core::limits::{
    PERSONAL_WIRE_BYTES, SALT_WIRE_BYTES, WIRE_KEY_BYTES_MAX, WIRE_OUT_BYTES_MAX,
};
use blake2s_core::{Error, Result};

/// Number of 32-bit words in a parameter block.
pub const PARAM_WORDS: usize = 8;

/// The four single-byte fields interleaved into word 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word0 {
    /// Digest length in bytes (1..=32).
    pub digest_length: u8,
    /// Key length in bytes (0..=32).
    pub key_length: u8,
    /// Fan-out; always 1 in sequential mode.
    pub fanout: u8,
    /// Maximal depth; always 1 in sequential mode.
    pub depth: u8,
}

impl Word0 {
    /// Pack the four byte lanes, least significant first.
    pub const fn pack(self) -> u32 {
        (self.digest_length as u32)
            | ((self.key_length as u32) << 8)
            | ((self.fanout as u32) << 16)
            | ((self.depth as u32) << 24)
    }
}

/// A built parameter block. Immutable; consumed once by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamBlock([u32; PARAM_WORDS]);

impl ParamBlock {
    /// The block as 8 words, in XOR order.
    pub const fn words(&self) -> &[u32; PARAM_WORDS] {
        &self.0
    }
}

/// Build the parameter block for a validated configuration.
///
/// Enforces the wire-format bounds (digest length 1..=32, key length 0..=32)
/// independently of the looser entry-point checks. Deterministic: equal
/// configurations produce identical blocks.
pub fn build(config: &HashConfig) -> Result<ParamBlock> {
    if config.out_len < 1 || config.out_len > WIRE_OUT_BYTES_MAX {
        return Err(Error::ParameterRange {
            got: config.out_len,
        });
    }
    if config.key.len() > WIRE_KEY_BYTES_MAX {
        return Err(Error::KeyTooLong {
            got: config.key.len(),
        });
    }

    let word0 = Word0 {
        digest_length: config.out_len as u8,
        key_length: config.key.len() as u8,
        fanout: 1,
        depth: 1,
    };

    let mut words = [0u32; PARAM_WORDS];
    words[0] = word0.pack();
    // words 1-3 stay zero: leaf length and node offset are unused in
    // sequential mode
    let [s0, s1] = le_word_pair(&config.salt, SALT_WIRE_BYTES);
    words[4] = s0;
    words[5] = s1;
    let [p0, p1] = le_word_pair(&config.personal, PERSONAL_WIRE_BYTES);
    words[6] = p0;
    words[7] = p1;

    Ok(ParamBlock(words))
}

/// Reinterpret the first `wire_len` bytes as two little-endian words,
/// zero-padding short input. Bytes past the window never reach the block.
fn le_word_pair(bytes: &[u8], wire_len: usize) -> [u32; 2] {
    let mut window = [0u8; 8];
    let n = bytes.len().min(wire_len);
    window[..n].copy_from_slice(&bytes[..n]);
    [
        u32::from_le_bytes(window[0..4].try_into().unwrap()),
        u32::from_le_bytes(window[4..8].try_into().unwrap()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(out_len: usize, key_len: usize) -> HashConfig {
        HashConfig {
            out_len,
            key: vec![0xaa; key_len],
            salt: Vec::new(),
            personal: Vec::new(),
        }
    }

    #[test]
    fn test_word0_lanes() {
        let word0 = Word0 {
            digest_length: 32,
            key_length: 17,
            fanout: 1,
            depth: 1,
        };
        let packed = word0.pack();
        assert_eq!(packed & 0xff, 32);
        assert_eq!((packed >> 8) & 0xff, 17);
        assert_eq!((packed >> 16) & 0xff, 1);
        assert_eq!((packed >> 24) & 0xff, 1);
    }

    #[test]
    fn test_unkeyed_256_block() {
        // No key, no salt: only word 0 is nonzero, 0x0101_0020
        let block = build(&config(32, 0)).unwrap();
        assert_eq!(block.words()[0], 0x0101_0020);
        assert!(block.words()[1..].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_word0_tracks_lengths() {
        for (out_len, key_len) in [(1, 0), (16, 16), (20, 32), (32, 32)] {
            let block = build(&config(out_len, key_len)).unwrap();
            let w0 = block.words()[0];
            assert_eq!(w0 & 0xff, out_len as u32);
            assert_eq!((w0 >> 8) & 0xff, key_len as u32);
            assert_eq!((w0 >> 16) & 0xff, 1);
            assert_eq!((w0 >> 24) & 0xff, 1);
        }
    }

    #[test]
    fn test_deterministic() {
        let cfg = HashConfig {
            out_len: 24,
            key: vec![1; 20],
            salt: (0..16).collect(),
            personal: (16..32).collect(),
        };
        assert_eq!(build(&cfg).unwrap(), build(&cfg).unwrap());
    }

    #[test]
    fn test_out_len_wire_bounds() {
        assert!(matches!(
            build(&config(0, 0)),
            Err(Error::ParameterRange { got: 0 })
        ));
        assert!(matches!(
            build(&config(33, 0)),
            Err(Error::ParameterRange { got: 33 })
        ));
        // 33..=64 passes the entry-point check but not the wire format
        assert!(matches!(
            build(&config(64, 0)),
            Err(Error::ParameterRange { got: 64 })
        ));
        assert!(build(&config(1, 0)).is_ok());
        assert!(build(&config(32, 0)).is_ok());
    }

    #[test]
    fn test_key_wire_bound() {
        assert!(build(&config(32, 32)).is_ok());
        assert!(matches!(
            build(&config(32, 33)),
            Err(Error::KeyTooLong { got: 33 })
        ));
        // A 64-byte key survives the entry-point check (16..=64) but not this one
        assert!(matches!(
            build(&config(32, 64)),
            Err(Error::KeyTooLong { got: 64 })
        ));
    }

    #[test]
    fn test_salt_and_personal_words() {
        let cfg = HashConfig {
            out_len: 32,
            key: Vec::new(),
            salt: vec![
                0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0xff, 0xff, 0xff, 0xff, 0xff,
                0xff, 0xff, 0xff,
            ],
            personal: vec![
                0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0xee, 0xee, 0xee, 0xee, 0xee,
                0xee, 0xee, 0xee,
            ],
        };
        let block = build(&cfg).unwrap();
        assert_eq!(block.words()[4], u32::from_le_bytes([0x01, 0x02, 0x03, 0x04]));
        assert_eq!(block.words()[5], u32::from_le_bytes([0x05, 0x06, 0x07, 0x08]));
        assert_eq!(block.words()[6], u32::from_le_bytes([0x11, 0x12, 0x13, 0x14]));
        assert_eq!(block.words()[7], u32::from_le_bytes([0x15, 0x16, 0x17, 0x18]));
    }

    #[test]
    fn test_salt_tail_ignored() {
        // Two 16-byte salts differing only in bytes 8..16 pack identically
        let mut salt_a = vec![0u8; 16];
        let mut salt_b = vec![0u8; 16];
        salt_a[..8].copy_from_slice(b"saltsalt");
        salt_b[..8].copy_from_slice(b"saltsalt");
        salt_b[8..].fill(0x5a);

        let mk = |salt: &[u8]| HashConfig {
            out_len: 32,
            key: Vec::new(),
            salt: salt.to_vec(),
            personal: Vec::new(),
        };
        assert_eq!(build(&mk(&salt_a)).unwrap(), build(&mk(&salt_b)).unwrap());
    }

    #[test]
    fn test_absent_salt_personal_zero_words() {
        let block = build(&config(32, 16)).unwrap();
        assert_eq!(&block.words()[4..8], &[0, 0, 0, 0]);
    }
}
