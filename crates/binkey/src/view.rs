//! Borrowed binary key views
//!
//! A [`KeyView`] is a non-owning `(pointer, length)` pair over bytes that live
//! somewhere else: a string, a page buffer, or the inline storage of a
//! [`FixedKey`](crate::FixedKey). Views are `Copy` and never allocate, so they
//! can be built on demand in comparison-heavy paths such as tree traversal.
//!
//! Views order byte-wise lexicographically; when one view is a prefix of the
//! other the shorter one sorts first.
//!
//! Composite keys are built by concatenating 8-byte fields. [`KeyView::slice`]
//! reads the leading field and [`KeyView::shift`] steps past it.

use crate::endian::{BigEndian, EndianTransform};
use crate::error::{KeyError, Result};
use std::cmp::Ordering;
use std::ffi::CStr;
use std::fmt;

/// Width of one composite key field in bytes
pub const WORD: usize = 8;

/// Read-only view over an externally owned byte sequence
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyView<'a> {
    bytes: &'a [u8],
}

impl<'a> KeyView<'a> {
    /// Create a view over raw bytes
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The empty view
    #[inline]
    pub const fn empty() -> Self {
        Self { bytes: &[] }
    }

    /// Create a view over a byte-buffer container
    #[inline]
    pub fn from_buffer<B>(buffer: &'a B) -> Self
    where
        B: AsRef<[u8]> + ?Sized,
    {
        Self::new(buffer.as_ref())
    }

    /// Create a view over a NUL-terminated byte sequence
    ///
    /// The view ends before the first `0` byte. If there is none the whole
    /// slice is used.
    pub fn from_nul_terminated(bytes: &'a [u8]) -> Self {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Self::new(&bytes[..end])
    }

    /// Length in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Alias for [`KeyView::len`]
    #[inline]
    pub const fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the view has no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The viewed bytes
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Alias for [`KeyView::as_bytes`]
    #[inline]
    pub const fn data(&self) -> &'a [u8] {
        self.bytes
    }

    /// Copy the bytes into an owned buffer
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Copy the bytes into an owned string, replacing invalid UTF-8
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.bytes).into_owned()
    }

    /// Leading field as a big-endian integer
    ///
    /// Reads the first `min(len, 8)` bytes as a big-endian value. Shorter views
    /// are zero-extended on the left, so `[0, 0, 1]` yields `1`. The result is a
    /// host integer and must not be persisted.
    #[inline]
    pub fn slice(&self) -> u64 {
        let n = self.len().min(WORD);
        let mut buf = [0u8; WORD];
        buf[WORD - n..].copy_from_slice(&self.bytes[..n]);
        BigEndian::decode::<u64>(buf)
    }

    /// Leading field as an order-preserving integer
    ///
    /// Like [`KeyView::slice`] but shorter views are padded with zeros on the
    /// right. The result is monotonic with view order: `a <= b` implies
    /// `a.prefix_u64() <= b.prefix_u64()`.
    #[inline]
    pub fn prefix_u64(&self) -> u64 {
        let n = self.len().min(WORD);
        let mut buf = [0u8; WORD];
        buf[..n].copy_from_slice(&self.bytes[..n]);
        BigEndian::decode::<u64>(buf)
    }

    /// View with the leading 8-byte field removed
    ///
    /// # Panics
    ///
    /// Panics if the view is shorter than 8 bytes.
    #[inline]
    #[must_use]
    pub fn shift(self) -> Self {
        self.shift_many(1)
    }

    /// View with the leading `n` 8-byte fields removed
    ///
    /// # Panics
    ///
    /// Panics if the view is shorter than `8 * n` bytes.
    #[inline]
    #[must_use]
    pub fn shift_many(self, n: usize) -> Self {
        let skip = n.saturating_mul(WORD);
        assert!(
            self.len() >= skip,
            "cannot shift {n} fields off a {}-byte key",
            self.len()
        );
        Self::new(&self.bytes[skip..])
    }

    /// Checked [`KeyView::shift`]
    pub fn try_shift(self) -> Result<Self> {
        self.try_shift_many(1)
    }

    /// Checked [`KeyView::shift_many`]
    pub fn try_shift_many(self, n: usize) -> Result<Self> {
        let needed = n.saturating_mul(WORD);
        if self.len() < needed {
            #[cfg(feature = "tracing")]
            tracing::trace!(needed, actual = self.len(), "rejected key shift");
            return Err(KeyError::InsufficientLength {
                needed,
                actual: self.len(),
            });
        }
        Ok(Self::new(&self.bytes[needed..]))
    }

    /// Iterate over 8-byte fields, each decoded like [`KeyView::slice`]
    ///
    /// A trailing partial field is zero-extended.
    pub fn words(self) -> impl Iterator<Item = u64> + 'a {
        self.bytes.chunks(WORD).map(|chunk| KeyView::new(chunk).slice())
    }

    /// Render as lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Display for KeyView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for KeyView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyView({})", self.to_hex())
    }
}

impl<'a> From<&'a [u8]> for KeyView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for KeyView<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for KeyView<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for KeyView<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a String> for KeyView<'a> {
    fn from(s: &'a String) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a CStr> for KeyView<'a> {
    fn from(s: &'a CStr) -> Self {
        Self::new(s.to_bytes())
    }
}

impl AsRef<[u8]> for KeyView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

/// Types that expose their bytes as a [`KeyView`]
///
/// Both [`KeyView`] and [`FixedKey`](crate::FixedKey) implement this, which
/// lets index code compare keys of different concrete types.
pub trait AsKeyView {
    /// Borrow the key bytes
    fn key_view(&self) -> KeyView<'_>;

    /// Byte-wise comparison against another key
    fn key_cmp<K: AsKeyView + ?Sized>(&self, other: &K) -> Ordering {
        self.key_view().cmp(&other.key_view())
    }

    /// Byte-wise equality against another key
    fn key_eq<K: AsKeyView + ?Sized>(&self, other: &K) -> bool {
        self.key_view() == other.key_view()
    }
}

impl AsKeyView for KeyView<'_> {
    #[inline]
    fn key_view(&self) -> KeyView<'_> {
        *self
    }
}

impl AsKeyView for [u8] {
    #[inline]
    fn key_view(&self) -> KeyView<'_> {
        KeyView::new(self)
    }
}

impl AsKeyView for Vec<u8> {
    #[inline]
    fn key_view(&self) -> KeyView<'_> {
        KeyView::new(self)
    }
}

impl AsKeyView for str {
    #[inline]
    fn key_view(&self) -> KeyView<'_> {
        KeyView::new(self.as_bytes())
    }
}

impl AsKeyView for String {
    #[inline]
    fn key_view(&self) -> KeyView<'_> {
        KeyView::new(self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for KeyView<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}
