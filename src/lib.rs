#![cfg_attr(not(feature = "std"), no_std)]

//! A lightweight post-quantum key encapsulation core built on Learning With Rounding (LWR) over
//! a power-of-two modulus.
//!
//! The hard part lives in five leaf components, composed here: [`ct`] (branchless primitives),
//! [`keccak`] and [`sponge`] (the XOF/KDF layer), [`expand`] (the JIT matrix/secret expander),
//! and [`arith`] (mod-`Q` arithmetic and safe-zone reconciliation). This module wires them into
//! [`keygen`], [`encapsulate`], and [`decapsulate`].
//!
//! This is an IND-CPA-style core with explicit reconciliation, not a full IND-CCA KEM: there is
//! no Fujisaki–Okamoto wrapper here, and a tampered ciphertext is rejected implicitly — it just
//! decapsulates to an unrelated key rather than returning an error.

pub mod arith;
pub mod ct;
pub mod error;
pub mod expand;
pub mod keccak;
pub mod params;
pub mod sponge;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use error::Error;
pub use params::{K2, K3, K4, K5, K6, Params, RamMode};

use expand::Expander;
use params::{MASK_LEN, N, SEED_LEN, SHARED_LEN, TAG_KDF};
use sponge::{Shake256, sha3_256};

/// Largest supported module rank (§3: `K ∈ {2,3,4,5,6}`).
pub const MAX_K: usize = 6;

/// `MAX_K * N`: the flattened capacity every key/ciphertext buffer is sized to, regardless of
/// the instantiation's actual `K`. Only the first `K * N` entries of each such buffer are
/// meaningful; this trades a few KiB of unused tail capacity for value types whose size doesn't
/// depend on a generic const parameter, which stable Rust cannot express as `[u8; K * N]` for
/// generic `K` (see `DESIGN.md`).
pub const MAX_KN: usize = MAX_K * N;

/// Internal domain tag distinguishing keygen's entropy split from encapsulate's, so the two
/// contexts never derive colliding seeds from the same 32 bytes of entropy. Distinct from the
/// wire-level domain bytes of §6 (`0x00`/`0xFF`/`0x02`/`0x06`/`0x1F`), which tag XOF absorbs
/// inside the expander and KDF, not this entropy-preprocessing step.
const ENTROPY_TAG_KEYGEN: u8 = 0x10;
const ENTROPY_TAG_ENCAPS: u8 = 0x11;

/// Splits caller-supplied entropy into two independent 32-byte seeds via one continuous SHAKE256
/// stream, domain-separated by `context` (§2: "SHAKE domain-split into `pk.seed` and
/// `secret_seed`").
fn split_entropy(entropy: &[u8; SEED_LEN], context: u8) -> ([u8; SEED_LEN], [u8; SEED_LEN]) {
    let mut xof = Shake256::new();
    xof.absorb(entropy);
    xof.absorb(&[context]);
    let mut out = [0u8; 2 * SEED_LEN];
    xof.squeeze(&mut out);
    let mut a = [0u8; SEED_LEN];
    let mut b = [0u8; SEED_LEN];
    a.copy_from_slice(&out[..SEED_LEN]);
    b.copy_from_slice(&out[SEED_LEN..]);
    ct::secure_zero(&mut out);
    (a, b)
}

/// Derives a single 32-byte seed from caller-supplied entropy (§2: "...or into `r_seed`
/// (encapsulate)").
fn derive_seed(entropy: &[u8; SEED_LEN], context: u8) -> [u8; SEED_LEN] {
    let mut xof = Shake256::new();
    xof.absorb(entropy);
    xof.absorb(&[context]);
    let mut out = [0u8; SEED_LEN];
    xof.squeeze(&mut out);
    out
}

/// A public key: `{ seed: byte[32], b: byte[K·N] }` (§3, §6).
///
/// `seed` roots the deterministic matrix expansion; `b` holds the compressed `A·s` produced by
/// [`keygen`]. Immutable and copy-by-value once created, per §9's ownership note. Public material
/// — zeroizing it is a hygiene measure, not a secrecy requirement (§5), so this derives `Zeroize`
/// but not `ZeroizeOnDrop`.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct PublicKey {
    k: usize,
    seed: [u8; SEED_LEN],
    b: [u8; MAX_KN],
}

impl PublicKey {
    /// The module rank this key was generated for.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The 32-byte matrix seed.
    pub fn seed(&self) -> &[u8; SEED_LEN] {
        &self.seed
    }

    /// The compressed `A·s` entries, `k() * N` bytes, row-major (`b[i][j]` at `i * N + j`).
    pub fn b(&self) -> &[u8] {
        &self.b[..self.k * N]
    }

    /// Packed byte layout of §6: `seed(32) || b(k*N)`. `out.len()` must equal
    /// `SEED_LEN + k() * N`.
    pub fn pack(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), SEED_LEN + self.k * N);
        out[..SEED_LEN].copy_from_slice(&self.seed);
        out[SEED_LEN..].copy_from_slice(self.b());
    }

    /// Reconstructs a `PublicKey` for module rank `k` from its packed byte layout.
    pub fn unpack(k: usize, bytes: &[u8]) -> Self {
        debug_assert!((2..=MAX_K).contains(&k));
        debug_assert_eq!(bytes.len(), SEED_LEN + k * N);
        let mut seed = [0u8; SEED_LEN];
        seed.copy_from_slice(&bytes[..SEED_LEN]);
        let mut b = [0u8; MAX_KN];
        b[..k * N].copy_from_slice(&bytes[SEED_LEN..]);
        PublicKey { k, seed, b }
    }
}

/// A secret key: `{ s: int16[K·N] }`, each entry ternary (§3). Zeroized on drop.
///
/// Not wire-serialized by the core (§6); [`SecretKey::pack`]/[`SecretKey::unpack`] implement a
/// caller-chosen two-bit-per-coefficient encoding, adequate for persistence but not a mandated
/// interchange format.
#[derive(Clone, ZeroizeOnDrop)]
pub struct SecretKey {
    k: usize,
    s: [i16; MAX_KN],
}

impl SecretKey {
    /// The module rank this key was generated for.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The ternary secret coefficients, `k() * N` entries, row-major.
    pub fn s(&self) -> &[i16] {
        &self.s[..self.k * N]
    }

    /// Packs `s()` two bits per coefficient (`00` = 0, `01` = +1, `10` = -1), four coefficients
    /// per byte, least-significant pair first. `out.len()` must equal `ceil(k() * N / 4)`.
    pub fn pack(&self, out: &mut [u8]) {
        let n = self.k * N;
        debug_assert_eq!(out.len(), n.div_ceil(4));
        out.fill(0);
        for (j, &coeff) in self.s[..n].iter().enumerate() {
            let code: u8 = match coeff {
                -1 => 0b10,
                0 => 0b00,
                1 => 0b01,
                _ => unreachable!("secret coefficients are ternary"),
            };
            out[j / 4] |= code << ((j % 4) * 2);
        }
    }

    /// Reconstructs a `SecretKey` for module rank `k` from its packed byte layout.
    pub fn unpack(k: usize, bytes: &[u8]) -> Self {
        debug_assert!((2..=MAX_K).contains(&k));
        let n = k * N;
        debug_assert_eq!(bytes.len(), n.div_ceil(4));
        let mut s = [0i16; MAX_KN];
        for (j, slot) in s[..n].iter_mut().enumerate() {
            let code = (bytes[j / 4] >> ((j % 4) * 2)) & 0b11;
            *slot = match code {
                0b10 => -1,
                0b01 => 1,
                _ => 0,
            };
        }
        SecretKey { k, s }
    }
}

/// A ciphertext: `{ u: byte[K·N], mask: byte[MASK_LEN], cnt: uint16 }` (§3, §6).
///
/// Public material — zeroizing it is a hygiene measure, not a secrecy requirement (§5), so this
/// derives `Zeroize` but not `ZeroizeOnDrop`.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Ciphertext {
    k: usize,
    u: [u8; MAX_KN],
    mask: [u8; MASK_LEN],
    cnt: u16,
}

impl Ciphertext {
    /// The module rank this ciphertext was produced for.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The compressed `Aᵀ·r` entries, `k() * N` bytes, row-major.
    pub fn u(&self) -> &[u8] {
        &self.u[..self.k * N]
    }

    /// The reconciliation mask: bit `j` of byte `j/8`, set iff position `j` fell in the safe
    /// zone of `v`.
    pub fn mask(&self) -> &[u8; MASK_LEN] {
        &self.mask
    }

    /// The population count of `mask()` (§3 invariant 3: always equal to `popcount(mask())`).
    pub fn cnt(&self) -> u16 {
        self.cnt
    }

    /// Packed byte layout of §6: `u(k*N) || mask(MASK_LEN) || cnt(2, little-endian)`.
    /// `out.len()` must equal `k() * N + MASK_LEN + 2`.
    pub fn pack(&self, out: &mut [u8]) {
        let n = self.k * N;
        debug_assert_eq!(out.len(), n + MASK_LEN + 2);
        out[..n].copy_from_slice(self.u());
        out[n..n + MASK_LEN].copy_from_slice(&self.mask);
        out[n + MASK_LEN..].copy_from_slice(&self.cnt.to_le_bytes());
    }

    /// Reconstructs a `Ciphertext` for module rank `k` from its packed byte layout.
    pub fn unpack(k: usize, bytes: &[u8]) -> Self {
        debug_assert!((2..=MAX_K).contains(&k));
        let n = k * N;
        debug_assert_eq!(bytes.len(), n + MASK_LEN + 2);
        let mut u = [0u8; MAX_KN];
        u[..n].copy_from_slice(&bytes[..n]);
        let mut mask = [0u8; MASK_LEN];
        mask.copy_from_slice(&bytes[n..n + MASK_LEN]);
        let cnt = u16::from_le_bytes([bytes[n + MASK_LEN], bytes[n + MASK_LEN + 1]]);
        Ciphertext { k, u, mask, cnt }
    }
}

/// The 32-byte shared key output by [`encapsulate`]/[`decapsulate`]. Zeroized on drop; compare
/// with [`ConstantTimeEq::ct_eq`], never `==`, when the comparison result itself must not leak
/// through timing.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey(pub [u8; SHARED_LEN]);

impl AsRef<[u8]> for SharedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for SharedKey {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}

/// Materializes the `k` rows of a ternary secret/ephemeral vector rooted at `seed` into `rows`
/// (row `l` lives at `rows[l]`), ready for the caller's subsequent matrix-vector product.
fn expand_ternary_rows(exp: &Expander<'_>, k: usize, mode: RamMode, rows: &mut [[i8; N]; MAX_K]) {
    for (l, row) in rows.iter_mut().take(k).enumerate() {
        exp.ternary_row(l as u8, mode, row);
    }
}

/// Widens `rows[..k]` into `dst[..k*N]` as `i16`, the representation [`SecretKey`] persists.
fn widen_rows(rows: &[[i8; N]; MAX_K], k: usize, dst: &mut [i16]) {
    for (l, row) in rows.iter().take(k).enumerate() {
        for (j, &coeff) in row.iter().enumerate() {
            dst[l * N + j] = i16::from(coeff);
        }
    }
}

/// Generates a fresh `(PublicKey, SecretKey)` pair from 32 bytes of caller-supplied entropy,
/// using the canonical [`RamMode::RowWise`] expansion (§9 Open Question 1; see `DESIGN.md`).
pub fn keygen<P: Params>(entropy: &[u8; SEED_LEN]) -> (PublicKey, SecretKey) {
    keygen_with_mode::<P>(entropy, RamMode::default())
}

/// As [`keygen`], with an explicit [`RamMode`]. The caller is responsible for agreeing on the
/// mode with whoever will call [`encapsulate`] against the resulting public key (§4.3).
pub fn keygen_with_mode<P: Params>(entropy: &[u8; SEED_LEN], mode: RamMode) -> (PublicKey, SecretKey) {
    let k = P::K;
    debug_assert!((2..=MAX_K).contains(&k));

    let (pk_seed, mut secret_seed) = split_entropy(entropy, ENTROPY_TAG_KEYGEN);

    let sexp = Expander::new(&secret_seed);
    let mut s_rows = [[0i8; N]; MAX_K];
    expand_ternary_rows(&sexp, k, mode, &mut s_rows);
    let mut s = [0i16; MAX_KN];
    widen_rows(&s_rows, k, &mut s);

    let aexp = Expander::new(&pk_seed);
    let mut b = [0u8; MAX_KN];
    let mut a_row = [0i32; N];
    for i in 0..k {
        let mut acc = [0i32; N];
        for l in 0..k {
            aexp.matrix_row(i as u8, l as u8, mode, &mut a_row);
            arith::mac_accumulate(&mut acc, &a_row, &s_rows[l]);
        }
        let out_row: &mut [u8; N] = (&mut b[i * N..(i + 1) * N]).try_into().unwrap();
        arith::compress(&acc, out_row);
    }

    ct::secure_zero(&mut secret_seed);
    ct::secure_zero(&mut a_row);
    for row in s_rows.iter_mut().take(k) {
        ct::secure_zero(row);
    }

    (PublicKey { k, seed: pk_seed, b }, SecretKey { k, s })
}

/// Encapsulates a fresh shared key against `pk`, using `RamMode::RowWise` (must match the mode
/// `pk` was generated with; see §4.3 and `DESIGN.md`).
pub fn encapsulate<P: Params>(pk: &PublicKey, entropy: &[u8; SEED_LEN]) -> (Ciphertext, SharedKey) {
    encapsulate_with_mode::<P>(pk, entropy, RamMode::default())
}

/// As [`encapsulate`], with an explicit [`RamMode`].
pub fn encapsulate_with_mode<P: Params>(
    pk: &PublicKey,
    entropy: &[u8; SEED_LEN],
    mode: RamMode,
) -> (Ciphertext, SharedKey) {
    let k = P::K;
    debug_assert_eq!(pk.k, k);

    let mut r_seed = derive_seed(entropy, ENTROPY_TAG_ENCAPS);

    let rexp = Expander::new(&r_seed);
    let mut r_rows = [[0i8; N]; MAX_K];
    expand_ternary_rows(&rexp, k, mode, &mut r_rows);

    let aexp = Expander::new(&pk.seed);
    let mut u = [0u8; MAX_KN];
    let mut a_row = [0i32; N];
    for i in 0..k {
        // Transposed: A[l, i], not A[i, l] -- the column index of keygen's product becomes the
        // row argument here (§4.4).
        let mut acc = [0i32; N];
        for l in 0..k {
            aexp.matrix_row(l as u8, i as u8, mode, &mut a_row);
            arith::mac_accumulate(&mut acc, &a_row, &r_rows[l]);
        }
        let out_row: &mut [u8; N] = (&mut u[i * N..(i + 1) * N]).try_into().unwrap();
        arith::compress(&acc, out_row);
    }

    let mut v_acc = [0i32; N];
    for l in 0..k {
        let b_row: &[u8; N] = (&pk.b[l * N..(l + 1) * N]).try_into().unwrap();
        arith::low_byte_mac_accumulate(&mut v_acc, b_row, &r_rows[l]);
    }
    let mut v = [0u8; N];
    arith::low_byte(&v_acc, &mut v);

    let mut mask = [0u8; MASK_LEN];
    let mut buf = [0u8; N];
    let cnt = arith::extract_bits(&v, &mut mask, &mut buf);
    let digest = sha3_256(TAG_KDF, &buf[..cnt as usize]);

    ct::secure_zero(&mut r_seed);
    ct::secure_zero(&mut a_row);
    ct::secure_zero(&mut v_acc);
    ct::secure_zero(&mut v);
    ct::secure_zero(&mut buf);
    for row in r_rows.iter_mut().take(k) {
        ct::secure_zero(row);
    }

    (Ciphertext { k, u, mask, cnt }, SharedKey(digest))
}

/// Recovers the shared key `ct` was encapsulated with, using `sk`. Never fails: a tampered or
/// mismatched ciphertext simply yields a shared key unrelated to the sender's (§4.4's implicit
/// rejection) rather than an error.
pub fn decapsulate<P: Params>(sk: &SecretKey, ct: &Ciphertext) -> SharedKey {
    let k = P::K;
    debug_assert_eq!(sk.k, k);
    debug_assert_eq!(ct.k, k);

    let mut vprime_acc = [0i32; N];
    let mut s_row = [0i8; N];
    for l in 0..k {
        for (j, slot) in s_row.iter_mut().enumerate() {
            *slot = sk.s[l * N + j] as i8;
        }
        let u_row: &[u8; N] = (&ct.u[l * N..(l + 1) * N]).try_into().unwrap();
        arith::low_byte_mac_accumulate(&mut vprime_acc, u_row, &s_row);
    }
    let mut vprime = [0u8; N];
    arith::low_byte(&vprime_acc, &mut vprime);

    let mut buf = [0u8; N];
    let cnt = arith::extract_bits_at_mask(&vprime, &ct.mask, &mut buf);
    let digest = sha3_256(TAG_KDF, &buf[..cnt as usize]);

    crate::ct::secure_zero(&mut vprime_acc);
    crate::ct::secure_zero(&mut vprime);
    crate::ct::secure_zero(&mut buf);
    crate::ct::secure_zero(&mut s_row);

    SharedKey(digest)
}

/// Runs a full `keygen` → `encapsulate` → `decapsulate` round trip from a single 32-byte entropy
/// value and checks, in constant time, that both sides agree on the shared key (§6: `self_test(
/// entropy: byte[32]) -> bool`). `entropy` feeds both the keygen and the encapsulate stage; this
/// is sound because the internal entropy-splitting domain tags (`ENTROPY_TAG_KEYGEN` vs.
/// `ENTROPY_TAG_ENCAPS`) keep the seeds each stage actually derives from it distinct, so the two
/// stages never share a seed despite sharing the raw entropy.
pub fn self_test<P: Params>(entropy: &[u8; SEED_LEN]) -> Result<(), Error> {
    self_test_with::<P>(entropy, entropy, RamMode::default())
}

/// As [`self_test`], with independent entropy for the keygen and encapsulate stages and an
/// explicit [`RamMode`]. An extra entry point for callers that want to vary those independently;
/// [`self_test`] covers the spec's one-argument contract.
pub fn self_test_with<P: Params>(
    keygen_entropy: &[u8; SEED_LEN],
    encaps_entropy: &[u8; SEED_LEN],
    mode: RamMode,
) -> Result<(), Error> {
    let (pk, sk) = keygen_with_mode::<P>(keygen_entropy, mode);
    let (ct, k1) = encapsulate_with_mode::<P>(&pk, encaps_entropy, mode);
    let k2 = decapsulate::<P>(&sk, &ct);
    if bool::from(k1.ct_eq(&k2)) {
        Ok(())
    } else {
        Err(Error::MismatchedSelfTest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_1_to_32() -> [u8; 32] {
        let mut e = [0u8; 32];
        for (i, b) in e.iter_mut().enumerate() {
            *b = (i + 1) as u8;
        }
        e
    }

    #[test]
    fn self_test_k5_row_wise_ramp_entropy() {
        assert_eq!(self_test::<K5>(&bytes_1_to_32()), Ok(()));
    }

    #[test]
    fn self_test_k2_ramp_entropy() {
        assert_eq!(self_test::<K2>(&bytes_1_to_32()), Ok(()));
    }

    #[test]
    fn self_test_k3_all_zero_entropy() {
        assert_eq!(self_test::<K3>(&[0u8; 32]), Ok(()));
    }

    #[test]
    fn self_test_k4_all_ff_entropy() {
        assert_eq!(self_test::<K4>(&[0xFFu8; 32]), Ok(()));
    }

    #[test]
    fn tampered_ciphertext_implicitly_rejects() {
        let (pk, sk) = keygen::<K5>(&bytes_1_to_32());
        let (ct, k1) = encapsulate::<K5>(&pk, &[0xAAu8; 32]);

        let mut tampered = ct.clone();
        tampered.u[0] ^= 0x01;

        let k2 = decapsulate::<K5>(&sk, &tampered);
        assert!(!bool::from(k1.ct_eq(&k2)));
    }

    #[test]
    fn independent_keygens_diverge() {
        let (pk_a, _) = keygen::<K3>(&[1u8; 32]);
        let (pk_b, _) = keygen::<K3>(&[2u8; 32]);
        assert_ne!(pk_a.seed, pk_b.seed);
        assert_ne!(pk_a.b, pk_b.b);
    }

    #[test]
    fn pack_unpack_round_trips_public_key() {
        let (pk, _) = keygen::<K3>(&[9u8; 32]);
        let mut bytes = [0u8; SEED_LEN + 3 * N];
        pk.pack(&mut bytes);
        let back = PublicKey::unpack(3, &bytes);
        assert_eq!(pk, back);
    }

    #[test]
    fn pack_unpack_round_trips_ciphertext() {
        let (pk, _) = keygen::<K2>(&[4u8; 32]);
        let (ct, _) = encapsulate::<K2>(&pk, &[6u8; 32]);
        let mut bytes = [0u8; 2 * N + MASK_LEN + 2];
        ct.pack(&mut bytes);
        let back = Ciphertext::unpack(2, &bytes);
        assert_eq!(ct, back);
    }

    #[test]
    fn pack_unpack_round_trips_secret_key() {
        let (_, sk) = keygen::<K4>(&[8u8; 32]);
        let mut bytes = [0u8; (4 * N + 3) / 4];
        sk.pack(&mut bytes);
        let back = SecretKey::unpack(4, &bytes);
        assert_eq!(sk.s(), back.s());
    }

    #[test]
    fn element_wise_and_row_wise_keys_are_not_interoperable() {
        // Not a bug: §4.3/§9 Open Question 1 -- the two RAM modes are deliberately distinct
        // streams, so a row-wise keypair fails to round-trip against an element-wise peer.
        let entropy = bytes_1_to_32();
        let (pk, sk) = keygen_with_mode::<K3>(&entropy, RamMode::RowWise);
        let (ct, k1) = encapsulate_with_mode::<K3>(&pk, &[0x77u8; 32], RamMode::ElementWise);
        let k2 = decapsulate::<K3>(&sk, &ct);
        assert!(!bool::from(k1.ct_eq(&k2)));
    }

    #[test]
    fn shared_key_is_thirty_two_bytes() {
        let (pk, _) = keygen::<K2>(&[3u8; 32]);
        let (_, shared) = encapsulate::<K2>(&pk, &[5u8; 32]);
        assert_eq!(shared.as_ref().len(), SHARED_LEN);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Round-trip agreement (spec.md §8 correctness property) across random entropy, for
        /// every module rank.
        #[test]
        fn round_trip_agrees_for_random_entropy(
            keygen_entropy in any::<[u8; 32]>(),
            encaps_entropy in any::<[u8; 32]>(),
        ) {
            prop_assert_eq!(self_test_with::<K2>(&keygen_entropy, &encaps_entropy, RamMode::RowWise), Ok(()));
            prop_assert_eq!(self_test_with::<K3>(&keygen_entropy, &encaps_entropy, RamMode::RowWise), Ok(()));
            prop_assert_eq!(self_test_with::<K5>(&keygen_entropy, &encaps_entropy, RamMode::RowWise), Ok(()));
        }

        /// `ct.cnt == popcount(ct.mask)` (spec.md §3 invariant 3), for arbitrary keypairs and
        /// ephemeral entropy.
        #[test]
        fn ciphertext_cnt_matches_mask_popcount(
            keygen_entropy in any::<[u8; 32]>(),
            encaps_entropy in any::<[u8; 32]>(),
        ) {
            let (pk, _) = keygen::<K3>(&keygen_entropy);
            let (ct, _) = encapsulate::<K3>(&pk, &encaps_entropy);
            let popcount: u32 = ct.mask().iter().map(|b| b.count_ones()).sum();
            prop_assert_eq!(u32::from(ct.cnt()), popcount);
        }

        /// Two independent keygens essentially never collide on `pk.seed` (spec.md §8 vector 6).
        #[test]
        fn independent_keygens_essentially_never_collide(
            a in any::<[u8; 32]>(),
            b in any::<[u8; 32]>(),
        ) {
            prop_assume!(a != b);
            let (pk_a, _) = keygen::<K4>(&a);
            let (pk_b, _) = keygen::<K4>(&b);
            prop_assert_ne!(pk_a.seed(), pk_b.seed());
        }
    }
}
