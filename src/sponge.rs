//! SHAKE-256 and SHA3-256 on top of the fixed Keccak-f\[1600\] permutation.
//!
//! Both constructions share a 136-byte rate (capacity 512 bits, per FIPS 202); they differ only
//! in the domain-separation suffix absorbed just before the padding bit. [`Sponge`] is generic
//! over that suffix so [`Shake256`] and the one-shot [`sha3_256`] share one implementation, the
//! way the teacher's `CyclistCore` shares one absorb/squeeze implementation across its hash and
//! keyed variants.

use zeroize::Zeroize;

use crate::keccak::KeccakState;

/// Bitrate in bytes shared by SHAKE-256 and SHA3-256 (capacity 512 bits, rate 1600-512 bits).
pub const RATE: usize = 136;

/// SHAKE-256 domain-separation suffix (FIPS 202 §6.2).
pub const SHAKE_SUFFIX: u8 = 0x1f;

/// SHA3-256 domain-separation suffix (FIPS 202 §6.1).
pub const SHA3_SUFFIX: u8 = 0x06;

/// A restartable sponge over Keccak-f\[1600\], parameterized by its domain-separation suffix.
///
/// Models the construction as a stream object holding the permutation state and a byte cursor,
/// not as a pre-materialized output vector — the [JIT expander](crate::expand) squeezes
/// coefficients one sample at a time without ever buffering a full row's worth of output.
pub struct Sponge<const SUFFIX: u8> {
    state: KeccakState,
    pos: usize,
    squeezing: bool,
}

impl<const SUFFIX: u8> Sponge<SUFFIX> {
    /// Starts a new, empty sponge.
    pub fn new() -> Self {
        Sponge { state: KeccakState::default(), pos: 0, squeezing: false }
    }

    /// Absorbs `data`, XORing it byte-wise into the rate portion of the state and permuting
    /// whenever the cursor reaches the rate boundary. May be called multiple times before
    /// [`Self::squeeze`]; must not be called afterward.
    pub fn absorb(&mut self, data: &[u8]) {
        debug_assert!(!self.squeezing, "cannot absorb after squeezing has started");
        let mut data = data;
        while !data.is_empty() {
            let take = (RATE - self.pos).min(data.len());
            let bytes = self.state.as_mut();
            for i in 0..take {
                bytes[self.pos + i] ^= data[i];
            }
            self.pos += take;
            data = &data[take..];
            if self.pos == RATE {
                self.state.permute();
                self.pos = 0;
            }
        }
    }

    /// Applies the domain suffix and the final padding bit, then permutes once, transitioning
    /// the sponge from absorbing to squeezing. Idempotent: a second call is a no-op.
    pub fn finalize(&mut self) {
        if self.squeezing {
            return;
        }
        let bytes = self.state.as_mut();
        bytes[self.pos] ^= SUFFIX;
        bytes[RATE - 1] ^= 0x80;
        self.state.permute();
        self.pos = 0;
        self.squeezing = true;
    }

    /// Fills `out` with squeezed output, permuting the state as needed to produce more than one
    /// rate's worth of bytes. Finalizes the sponge on first use if not already finalized.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.finalize();
        let mut written = 0;
        while written < out.len() {
            if self.pos == RATE {
                self.state.permute();
                self.pos = 0;
            }
            let take = (RATE - self.pos).min(out.len() - written);
            out[written..written + take]
                .copy_from_slice(&self.state.as_ref()[self.pos..self.pos + take]);
            self.pos += take;
            written += take;
        }
    }
}

impl<const SUFFIX: u8> Default for Sponge<SUFFIX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SUFFIX: u8> Zeroize for Sponge<SUFFIX> {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.pos = 0;
        self.squeezing = false;
    }
}

/// A restartable SHAKE-256 extendable-output stream.
pub type Shake256 = Sponge<SHAKE_SUFFIX>;

/// Computes a domain-separated SHA3-256 digest of `domain || data`.
///
/// Absorbs the single `domain` byte followed by `data`, applies standard SHA3 padding, and
/// returns the first 32 bytes of the resulting state. Used as the KDF over the reconciliation
/// bit-stream (domain byte `0x02`, shared between `encapsulate` and `decapsulate` so both sides
/// derive the same key from matching input).
pub fn sha3_256(domain: u8, data: &[u8]) -> [u8; 32] {
    let mut sponge = Sponge::<SHA3_SUFFIX>::new();
    sponge.absorb(&[domain]);
    sponge.absorb(data);
    let mut out = [0u8; 32];
    sponge.squeeze(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shake256(data: &[u8], out_len: usize) -> Vec<u8> {
        let mut s = Shake256::new();
        s.absorb(data);
        let mut out = vec![0u8; out_len];
        s.squeeze(&mut out);
        out
    }

    #[test]
    fn shake256_empty_message() {
        // NIST SHAKE256 test vector for the empty message, first 32 bytes.
        let out = shake256(b"", 32);
        assert_eq!(
            out,
            [
                0x46, 0xb9, 0xdd, 0x2b, 0x0b, 0xa8, 0x8d, 0x13, 0x23, 0x3b, 0x3f, 0xeb, 0x74, 0x3e,
                0xeb, 0x24, 0x3f, 0xcd, 0x52, 0xea, 0x62, 0xb8, 0x1b, 0x82, 0xb5, 0x0c, 0x27, 0x64,
                0x6e, 0xd5, 0x76, 0x2f,
            ]
        );
    }

    #[test]
    fn shake256_squeeze_is_prefix_stable() {
        // Squeezing 64 bytes in one call must equal two 32-byte squeezes concatenated.
        let one_shot = shake256(b"safe-zone", 64);

        let mut s = Shake256::new();
        s.absorb(b"safe-zone");
        let mut first = [0u8; 32];
        s.squeeze(&mut first);
        let mut second = [0u8; 32];
        s.squeeze(&mut second);

        assert_eq!(&one_shot[..32], &first[..]);
        assert_eq!(&one_shot[32..], &second[..]);
    }

    #[test]
    fn absorb_can_be_split_across_calls() {
        let mut a = Shake256::new();
        a.absorb(b"hello, world");
        let mut out_a = [0u8; 32];
        a.squeeze(&mut out_a);

        let mut b = Shake256::new();
        b.absorb(b"hello, ");
        b.absorb(b"world");
        let mut out_b = [0u8; 32];
        b.squeeze(&mut out_b);

        assert_eq!(out_a, out_b);
    }

    #[test]
    fn sha3_256_domain_separation_changes_output() {
        let a = sha3_256(0x02, b"same input");
        let b = sha3_256(0x03, b"same input");
        assert_ne!(a, b);
    }

    #[test]
    fn sha3_256_empty_data_is_well_defined() {
        // ct.cnt == 0 boundary case (spec.md §8): SHA3-256(0x02) with no further input.
        let out = sha3_256(0x02, b"");
        assert_eq!(out.len(), 32);
        // Deterministic: repeated calls agree.
        assert_eq!(out, sha3_256(0x02, b""));
    }
}
