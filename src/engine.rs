//! Generic streaming hash engine

use std::io;
use std::mem;

use crate::output::Digest;

/// A streaming hash computation, generic over the digest algorithm `D`.
///
/// One `Hasher` owns exactly one in-progress computation. Bytes are fed in
/// with [`update`](Self::update) (in any number of chunks; only the
/// concatenation matters), the computation is closed with
/// [`finalize`](Self::finalize), and the fixed-length result is readable
/// any number of times afterwards.
///
/// The algorithm is selected at compile time: each provider context type
/// produces a distinct engine type with a distinct output width, so there
/// is no runtime dispatch and no way to mix algorithms within one engine.
/// Use the aliases in [`crate::algorithms`] rather than naming provider
/// types directly.
///
/// Cloning duplicates the in-progress state; both clones continue
/// independently. For take-and-leave-fresh semantics, `std::mem::take`
/// leaves the source as a brand-new engine for the same algorithm.
pub struct Hasher<D: digest::Digest> {
    ctx: D,
    digest: Option<Digest<D>>,
}

impl<D: digest::Digest> Hasher<D> {
    /// Create a fresh engine with an empty computation state
    #[must_use]
    pub fn new() -> Self {
        Self {
            ctx: D::new(),
            digest: None,
        }
    }

    /// Feed bytes into the ongoing computation.
    ///
    /// Accepts anything exposing a contiguous byte view: `&[u8]`, `&str`,
    /// `String`, `Vec<u8>`, fixed arrays, and so on. Text is hashed as its
    /// raw UTF-8 bytes, never re-encoded. Calling `update` several times is
    /// equivalent to a single call over the concatenated input.
    ///
    /// # Panics
    ///
    /// Panics if the engine has already been finalized: the underlying
    /// computation state is not rewindable, so feeding more input would
    /// silently produce a digest of nothing. Construct a new engine instead.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        assert!(
            self.digest.is_none(),
            "update on a finalized hasher; the stream is closed, construct a new hasher"
        );
        self.ctx.update(data);
    }

    /// By-value [`update`](Self::update), for feeding fragments fluently.
    ///
    /// # Panics
    ///
    /// Panics if the engine has already been finalized.
    #[must_use]
    pub fn chain(mut self, data: impl AsRef<[u8]>) -> Self {
        self.update(data);
        self
    }

    /// Close the computation and return the digest.
    ///
    /// The provider context is consumed and replaced with a fresh one; the
    /// result is cached, so repeated calls return the same digest without
    /// recomputing. The output width is a compile-time property of `D` and
    /// always matches the algorithm's canonical digest length.
    pub fn finalize(&mut self) -> &Digest<D> {
        if self.digest.is_none() {
            let ctx = mem::replace(&mut self.ctx, D::new());
            self.digest = Some(Digest::new(ctx.finalize()));
        }
        match &self.digest {
            Some(digest) => digest,
            None => unreachable!("digest was just computed"),
        }
    }

    /// Consuming [`finalize`](Self::finalize), returning the digest by value
    #[must_use]
    pub fn finish(mut self) -> Digest<D> {
        self.finalize();
        match self.digest {
            Some(digest) => digest,
            None => unreachable!("finalize always sets the digest"),
        }
    }

    /// Read the digest, or `None` if the engine has not been finalized yet.
    ///
    /// There is deliberately no way to observe a partial or zero-filled
    /// digest: before [`finalize`](Self::finalize) there is nothing to read.
    #[must_use]
    pub fn digest(&self) -> Option<&Digest<D>> {
        self.digest.as_ref()
    }

    /// One-shot digest of a single buffer.
    ///
    /// Equivalent to construct, one [`update`](Self::update), finalize.
    #[must_use]
    pub fn digest_of(data: impl AsRef<[u8]>) -> Digest<D> {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finish()
    }

    /// One-shot digest of a sequence of fragments, hashed in order.
    ///
    /// Equivalent to concatenating all fragments and hashing once. For
    /// fragments of mixed types, use the [`digest_of!`](crate::digest_of)
    /// macro instead.
    #[must_use]
    pub fn digest_of_parts<I, T>(parts: I) -> Digest<D>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut hasher = Self::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finish()
    }
}

impl<D: digest::Digest> Default for Hasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: digest::Digest + Clone> Clone for Hasher<D> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            digest: self.digest.clone(),
        }
    }
}

/// Feed a hasher through `std::io::Write`, e.g. with `std::io::copy`.
///
/// `write` behaves exactly like [`Hasher::update`], including the panic on
/// a finalized engine; `flush` is a no-op.
impl<D: digest::Digest> io::Write for Hasher<D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
