//! The crate's sole error type (§7).
//!
//! There are no runtime input errors: every buffer is fixed-size and its shape is part of the
//! type, so `keygen`/`encapsulate`/`decapsulate` are infallible. The only fallible-looking
//! surface is [`crate::self_test`], which has exactly one non-success sentinel. The teacher
//! carries no error-derive crate — it has no fallible operations either — so this follows the
//! same spirit with a hand-rolled `Display`/`Error` impl rather than reaching for one.

use core::fmt;

/// The sole error this crate can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `self_test` round-tripped a keypair and ciphertext but the decapsulated key did not match
    /// the encapsulated one. Unreachable given a correct implementation and honest entropy.
    MismatchedSelfTest,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MismatchedSelfTest => {
                write!(f, "self-test round trip produced mismatched shared keys")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
