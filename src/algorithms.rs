//! Algorithm bindings: one engine type per digest algorithm
//!
//! Each alias binds the generic engine to a concrete provider context, so
//! every algorithm is its own type with its own fixed output width. Adding
//! an algorithm is one alias plus its digest-length constant; the engine
//! itself never changes.

use crate::engine::Hasher;

/// MD5 digest length in bytes
pub const MD5_DIGEST_LEN: usize = 16;
/// SHA-1 digest length in bytes
pub const SHA1_DIGEST_LEN: usize = 20;
/// SHA-256 digest length in bytes
pub const SHA256_DIGEST_LEN: usize = 32;
/// SHA-512 digest length in bytes
pub const SHA512_DIGEST_LEN: usize = 64;

/// MD5 hash engine (16-byte digest). Broken for security use; provided for
/// legacy interoperability only.
pub type Md5 = Hasher<md5::Md5>;

/// SHA-1 hash engine (20-byte digest). Collision-broken; prefer SHA-256.
pub type Sha1 = Hasher<sha1::Sha1>;

/// SHA-256 hash engine (32-byte digest)
pub type Sha256 = Hasher<sha2::Sha256>;

/// SHA-512 hash engine (64-byte digest)
pub type Sha512 = Hasher<sha2::Sha512>;
