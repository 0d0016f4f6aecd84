//! Fixed LWR parameters and the per-instantiation module rank.
//!
//! `N`, `Q`, the compression shift, and the seed/mask lengths are fixed at build time (§3); only
//! the module rank `K` varies across instantiations, the way the teacher's `CyclistHash<P, WIDTH,
//! HASH_RATE>` varies its rate/width as const generics while the permutation stays fixed.

/// Ring dimension.
pub const N: usize = 256;

/// Modulus. Arithmetic is implicit mod `Q` via masking with [`Q_MASK`].
pub const Q: i32 = 8192;

/// `Q - 1`; `Q` is a power of two, so reduction mod `Q` is `x & Q_MASK`.
pub const Q_MASK: i32 = 0x1FFF;

/// Compression shift: public-key and ciphertext entries are `(x & Q_MASK) >> SHIFT`.
pub const SHIFT: u32 = 5;

/// Length in bytes of every seed (`pk.seed`, `secret_seed`, `r_seed`).
pub const SEED_LEN: usize = 32;

/// Length in bytes of the derived shared key.
pub const SHARED_LEN: usize = 32;

/// Length in bytes of the reconciliation mask (one bit per position of `N`).
pub const MASK_LEN: usize = N / 8;

/// Domain tag for JIT expansion of public matrix coefficients.
pub const TAG_MATRIX: u8 = 0x00;

/// Domain tag for JIT expansion of ternary secret/ephemeral vectors.
pub const TAG_TERNARY: u8 = 0xFF;

/// Domain tag for the KDF over the reconciliation bit-stream (shared by encaps and decaps).
pub const TAG_KDF: u8 = 0x02;

/// The four 8-bit reconciliation bucket centres.
pub const SAFE_ZONE_CENTRES: [i32; 4] = [32, 96, 160, 224];

/// Safe-zone margin: a value is "safe" iff it lies within this distance of some centre.
pub const SAFE_ZONE_MARGIN: i32 = 12;

/// JIT expansion strategy. Both modes are pure functions of `(seed, tag, indices)` and produce
/// bit-identical output for the same mode across runs (§3 invariant 4), but the two modes do
/// *not* produce the same stream as each other: `ElementWise` folds the element index into the
/// absorbed input, `RowWise` does not. Peers must agree on one mode out of band (§4.3, §9 Open
/// Question 1); this crate pins [`RamMode::RowWise`] as the canonical, interoperable default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RamMode {
    /// Element-wise JIT: one SHAKE256 invocation per scalar, ~`N`x less scratch, much slower.
    ElementWise,
    /// Row-wise JIT: one SHAKE256 invocation squeezes a full row of `N` samples at once.
    RowWise,
}

impl Default for RamMode {
    fn default() -> Self {
        RamMode::RowWise
    }
}

/// The module rank `K`, fixed per instantiation. Valid values are `2..=6`; `K` determines the
/// effective lattice dimension `K * N` and, with it, the sizes of `pk.b`, `ct.u`, and `sk.s`.
pub trait Params {
    /// Module rank.
    const K: usize;
}

macro_rules! params_impl {
    ($name:ident, $k:literal) => {
        #[doc = concat!("Module rank `K = ", stringify!($k), "`.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;

        impl Params for $name {
            const K: usize = $k;
        }
    };
}

params_impl!(K2, 2);
params_impl!(K3, 3);
params_impl!(K4, 4);
params_impl!(K5, 5);
params_impl!(K6, 6);

/// Returns `K * N`, the flattened length of `pk.b`, `ct.u`, and `sk.s`.
#[inline(always)]
pub const fn kn(k: usize) -> usize {
    k * N
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q_is_power_of_two() {
        assert_eq!(Q & (Q - 1), 0);
        assert_eq!(Q_MASK, Q - 1);
    }

    #[test]
    fn mask_len_covers_one_bit_per_position() {
        assert_eq!(MASK_LEN * 8, N);
    }

    #[test]
    fn default_ram_mode_is_row_wise() {
        assert_eq!(RamMode::default(), RamMode::RowWise);
    }
}
