//! Incremental BLAKE2s state.
//!
//! Seeded from a validated configuration: the parameter block is XORed into
//! the initialization vector, then a key (if any) is absorbed as one padded
//! message block. The digest does not depend on how input is chunked.

#![forbid(unsafe_code)]

use blake2s_core::limits::BLOCK_BYTES;
use blake2s_core::Result;
use blake2s_params::{build, HashConfig};

use crate::engine::{compress, IV};

/// BLAKE2s hashing state.
pub struct Blake2s {
    /// Chaining state.
    h: [u32; 8],
    /// Bytes compressed so far.
    t: u64,
    /// Partial input block.
    buf: [u8; BLOCK_BYTES],
    buf_len: usize,
    /// Digest length fixed at initialization.
    out_len: usize,
}

impl Blake2s {
    /// Initialize from a validated configuration.
    ///
    /// Builds the parameter block (enforcing the wire-format bounds) and
    /// seeds the chaining state with `IV[i] ^ block[i]`.
    pub fn new(config: &HashConfig) -> Result<Self> {
        let block = build(config)?;

        let mut h = IV;
        for (word, param) in h.iter_mut().zip(block.words()) {
            *word ^= param;
        }

        let mut state = Self {
            h,
            t: 0,
            buf: [0u8; BLOCK_BYTES],
            buf_len: 0,
            out_len: config.out_len,
        };

        // Keyed mode: the key, zero-padded to a full block, is the first
        // message block
        if !config.key.is_empty() {
            let mut key_block = [0u8; BLOCK_BYTES];
            key_block[..config.key.len()].copy_from_slice(&config.key);
            state.update(&key_block);
        }

        Ok(state)
    }

    /// Absorb message bytes.
    pub fn update(&mut self, data: &[u8]) {
        let mut rest = data;

        // A full buffer is only compressed once further input shows it is
        // not the final block
        let fill = BLOCK_BYTES - self.buf_len;
        if rest.len() > fill {
            self.buf[self.buf_len..].copy_from_slice(&rest[..fill]);
            self.t += BLOCK_BYTES as u64;
            compress(&mut self.h, &self.buf, self.t, false);
            self.buf_len = 0;
            rest = &rest[fill..];

            while rest.len() > BLOCK_BYTES {
                let block: &[u8; BLOCK_BYTES] = rest[..BLOCK_BYTES].try_into().unwrap();
                self.t += BLOCK_BYTES as u64;
                compress(&mut self.h, block, self.t, false);
                rest = &rest[BLOCK_BYTES..];
            }
        }

        self.buf[self.buf_len..self.buf_len + rest.len()].copy_from_slice(rest);
        self.buf_len += rest.len();
    }

    /// Compress the final block and return the digest.
    pub fn finalize(mut self) -> Vec<u8> {
        self.t += self.buf_len as u64;
        self.buf[self.buf_len..].fill(0);
        let buf = self.buf;
        compress(&mut self.h, &buf, self.t, true);

        let mut out = vec![0u8; self.out_len];
        for (i, chunk) in out.chunks_mut(4).enumerate() {
            let bytes = self.h[i].to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        out
    }
}
