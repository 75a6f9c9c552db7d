//! Fixed-length digest value type with encoding support

use digest::{Output, OutputSizeUser};

use crate::error::{HashError, Result};

/// The completed output of a hash computation, typed by algorithm.
///
/// Wraps the provider's fixed-size output array, so a SHA-256 digest and a
/// SHA-512 digest are distinct types and can never be confused or compared
/// by accident. The length is a compile-time property of `D`.
pub struct Digest<D: OutputSizeUser> {
    bytes: Output<D>,
}

impl<D: OutputSizeUser> Digest<D> {
    pub(crate) fn new(bytes: Output<D>) -> Self {
        Self { bytes }
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy the digest into a `Vec<u8>`
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Consume the digest, returning the provider's output array
    #[must_use]
    pub fn into_bytes(self) -> Output<D> {
        self.bytes
    }

    /// Get the digest as a lowercase hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Get the digest as a standard base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Digest length in bytes, fixed per algorithm
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; present for API completeness alongside [`len`](Self::len)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Parse a digest from a hexadecimal string.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidHex`] if `hex` is not valid hexadecimal,
    /// or [`HashError::InvalidLength`] if it decodes to the wrong number of
    /// bytes for this algorithm.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex::decode(hex)?;
        Self::try_from(bytes.as_slice())
    }
}

impl<D: OutputSizeUser> TryFrom<&[u8]> for Digest<D> {
    type Error = HashError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != D::output_size() {
            return Err(HashError::InvalidLength {
                expected: D::output_size(),
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes: Output::<D>::clone_from_slice(bytes),
        })
    }
}

impl<D: OutputSizeUser> From<Output<D>> for Digest<D> {
    fn from(bytes: Output<D>) -> Self {
        Self::new(bytes)
    }
}

impl<D: OutputSizeUser> AsRef<[u8]> for Digest<D> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// Manual impls: deriving would put unwanted bounds on `D`, which is only a
// type-level algorithm selector here.

impl<D: OutputSizeUser> Clone for Digest<D> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
        }
    }
}

impl<D: OutputSizeUser> PartialEq for Digest<D> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<D: OutputSizeUser> Eq for Digest<D> {}

impl<D: OutputSizeUser> std::fmt::Display for Digest<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl<D: OutputSizeUser> std::fmt::Debug for Digest<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use crate::{HashError, Sha256};

    #[test]
    fn hex_round_trip() {
        let digest = Sha256::digest_of("abc");
        let parsed = crate::Digest::<sha2::Sha256>::from_hex(&digest.to_hex())
            .expect("own hex output must parse");
        assert_eq!(parsed, digest);
    }

    #[test]
    fn from_hex_rejects_bad_characters() {
        let err = crate::Digest::<sha2::Sha256>::from_hex("zz").unwrap_err();
        assert!(matches!(err, HashError::InvalidHex(_)));
    }

    #[test]
    fn hex_errors_compare_by_value() {
        // HashError is comparable even though the wrapped hex error type
        // only supports PartialEq.
        let first = crate::Digest::<sha2::Sha256>::from_hex("zz").unwrap_err();
        let second = crate::Digest::<sha2::Sha256>::from_hex("zz").unwrap_err();
        assert_eq!(first, second);
        assert_ne!(
            first,
            HashError::InvalidLength {
                expected: 32,
                actual: 1
            }
        );
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = crate::Digest::<sha2::Sha256>::from_hex("deadbeef").unwrap_err();
        assert_eq!(
            err,
            HashError::InvalidLength {
                expected: 32,
                actual: 4
            }
        );
    }

    #[test]
    fn try_from_slice_checks_length() {
        let digest = Sha256::digest_of(b"abc");
        let again = crate::Digest::<sha2::Sha256>::try_from(digest.as_bytes())
            .expect("exact-length slice converts");
        assert_eq!(again, digest);

        let err = crate::Digest::<sha2::Sha256>::try_from(&digest.as_bytes()[1..]).unwrap_err();
        assert_eq!(
            err,
            HashError::InvalidLength {
                expected: 32,
                actual: 31
            }
        );
    }

    #[test]
    fn display_is_lowercase_hex() {
        let digest = Sha256::digest_of("abc");
        assert_eq!(format!("{digest}"), digest.to_hex());
        assert_eq!(
            digest.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn base64_encoding() {
        // base64 of the well-known SHA-256("abc") digest bytes
        let digest = Sha256::digest_of("abc");
        assert_eq!(digest.to_base64(), "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=");
    }
}
