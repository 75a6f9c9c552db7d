//! Generic streaming digest engine over MD5, SHA-1, SHA-256 and SHA-512.
//!
//! One reusable engine, [`Hasher<D>`], computes any of the bound digest
//! algorithms over arbitrary byte input, incrementally or in one shot. The
//! cryptographic math is delegated to the RustCrypto provider crates; this
//! crate owns the computation lifecycle: a fresh engine accepts any number
//! of ordered [`update`](Hasher::update) calls, [`finalize`](Hasher::finalize)
//! closes the stream, and the fixed-length [`Digest`] is readable from then
//! on. Algorithm selection is purely compile-time, one engine type per
//! algorithm, with no runtime dispatch.
//!
//! # Streaming
//!
//! ```
//! use streamhash::Sha256;
//!
//! let mut hasher = Sha256::new();
//! hasher.update("a");
//! hasher.update("bc");
//! assert_eq!(
//!     hasher.finalize().to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//! );
//! ```
//!
//! # One-shot
//!
//! ```
//! use streamhash::{Md5, Sha1};
//!
//! assert_eq!(
//!     Md5::digest_of("abc").to_hex(),
//!     "900150983cd24fb0d6963f7d28e17f72",
//! );
//! assert_eq!(
//!     Sha1::digest_of_parts(["a", "b", "c"]).to_hex(),
//!     "a9993e364706816aba3e25717850c26c9cd0d89d",
//! );
//! ```
//!
//! # Mixed fragment packs
//!
//! ```
//! use streamhash::{digest_of, Sha256};
//!
//! let owned = String::from("bc");
//! let digest = digest_of!(Sha256; "a", owned);
//! assert_eq!(digest, Sha256::digest_of("abc"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod algorithms;
mod engine;
mod error;
mod output;

pub use algorithms::{
    Md5, Sha1, Sha256, Sha512, MD5_DIGEST_LEN, SHA1_DIGEST_LEN, SHA256_DIGEST_LEN,
    SHA512_DIGEST_LEN,
};
pub use engine::Hasher;
pub use error::{HashError, Result};
pub use output::Digest;

/// One-shot digest of a pack of heterogeneous fragments, hashed in order.
///
/// Each fragment may be any type usable with [`Hasher::update`] (`&str`,
/// `String`, `&[u8]`, `Vec<u8>`, arrays, ...); the result equals hashing
/// the concatenation of all fragments. Bare integers are rejected at
/// compile time since they carry no byte view.
///
/// ```
/// use streamhash::{digest_of, Sha512};
///
/// let digest = digest_of!(Sha512; "key|", vec![0x01, 0x02], "|salt");
/// assert_eq!(digest, Sha512::new().chain("key|").chain([0x01, 0x02]).chain("|salt").finish());
/// ```
#[macro_export]
macro_rules! digest_of {
    ($hasher:ty; $($part:expr),+ $(,)?) => {{
        let mut hasher = <$hasher>::new();
        $(hasher.update(&$part);)+
        hasher.finish()
    }};
}
