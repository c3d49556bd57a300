//! Fixed-width integer keys
//!
//! [`FixedKey`] owns an inline buffer of exactly `size_of::<T>()` bytes holding
//! the encoded form of one integer. The view over that buffer is never stored.
//! It is derived from `&self` on each call, so a copied or moved key always
//! exposes its own storage.
//!
//! With the default [`BigEndian`] transform the stored layout is the canonical
//! persisted format: most significant byte first, no padding, no length prefix
//! and no type tag. Unsigned keys then order the same as their values. Signed
//! keys are stored as raw two's complement and do not.

use crate::endian::{BigEndian, EndianTransform, KeyInt};
use crate::error::{KeyError, Result};
use crate::view::{AsKeyView, KeyView};
use binrw::io::{Read, Seek, Write};
use binrw::{BinRead, BinResult, BinWrite, Endian};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Integer key stored in an inline, order-preserving byte buffer
pub struct FixedKey<T: KeyInt, E: EndianTransform = BigEndian> {
    encoded: Option<T::Bytes>,
    _transform: PhantomData<fn() -> E>,
}

/// Key over a `u8`
pub type U8Key = FixedKey<u8>;
/// Key over an `i8`
pub type I8Key = FixedKey<i8>;
/// Key over a `u16`
pub type U16Key = FixedKey<u16>;
/// Key over an `i16`
pub type I16Key = FixedKey<i16>;
/// Key over a `u32`
pub type U32Key = FixedKey<u32>;
/// Key over an `i32`
pub type I32Key = FixedKey<i32>;
/// Key over a `u64`
pub type U64Key = FixedKey<u64>;
/// Key over an `i64`
pub type I64Key = FixedKey<i64>;

impl<T: KeyInt, E: EndianTransform> FixedKey<T, E> {
    /// Encoded width in bytes
    pub const WIDTH: usize = T::WIDTH;

    /// Encode `value` into a new key
    #[inline]
    pub fn new(value: T) -> Self {
        Self::from_encoded(E::encode(value))
    }

    /// Key with no encoded value
    ///
    /// Its view is empty. It compares less than every set key.
    #[inline]
    pub const fn unset() -> Self {
        Self {
            encoded: None,
            _transform: PhantomData,
        }
    }

    #[inline]
    const fn from_encoded(bytes: T::Bytes) -> Self {
        Self {
            encoded: Some(bytes),
            _transform: PhantomData,
        }
    }

    /// Rebuild a key from its encoded bytes
    ///
    /// The view must be exactly [`Self::WIDTH`] bytes long.
    pub fn from_view(view: KeyView<'_>) -> Result<Self> {
        if view.len() != T::WIDTH {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                expected = T::WIDTH,
                actual = view.len(),
                "rejected fixed key bytes"
            );
            return Err(KeyError::InvalidWidth {
                expected: T::WIDTH,
                actual: view.len(),
            });
        }
        let mut bytes = T::Bytes::default();
        bytes.as_mut().copy_from_slice(view.as_bytes());
        Ok(Self::from_encoded(bytes))
    }

    /// Parse a key from the hex rendering of its encoded bytes
    pub fn from_hex(hex: &str) -> Result<Self> {
        if hex.len() % 2 != 0 {
            return Err(KeyError::InvalidHex(hex::FromHexError::OddLength));
        }
        if hex.len() != T::WIDTH * 2 {
            return Err(KeyError::InvalidWidth {
                expected: T::WIDTH,
                actual: hex.len() / 2,
            });
        }
        let mut bytes = T::Bytes::default();
        hex::decode_to_slice(hex, bytes.as_mut())?;
        Ok(Self::from_encoded(bytes))
    }

    /// Returns true if the key holds an encoded value
    #[inline]
    pub const fn is_set(&self) -> bool {
        self.encoded.is_some()
    }

    /// Decode the stored value
    #[inline]
    pub fn value(&self) -> Option<T> {
        self.encoded.map(E::decode::<T>)
    }

    /// View over this key's own buffer
    #[inline]
    pub fn view(&self) -> KeyView<'_> {
        KeyView::new(self.as_bytes())
    }

    /// Encoded bytes, empty when unset
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.encoded {
            Some(bytes) => bytes.as_ref(),
            None => &[],
        }
    }

    /// Render the encoded bytes as lowercase hex
    pub fn to_hex(&self) -> String {
        self.view().to_hex()
    }
}

impl<T: KeyInt, E: EndianTransform> Default for FixedKey<T, E> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T: KeyInt, E: EndianTransform> From<T> for FixedKey<T, E> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: KeyInt, E: EndianTransform> Clone for FixedKey<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: KeyInt, E: EndianTransform> Copy for FixedKey<T, E> {}

impl<T: KeyInt, E: EndianTransform> PartialEq for FixedKey<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<T: KeyInt, E: EndianTransform> Eq for FixedKey<T, E> {}

impl<T: KeyInt, E: EndianTransform> PartialOrd for FixedKey<T, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: KeyInt, E: EndianTransform> Ord for FixedKey<T, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<T: KeyInt, E: EndianTransform> Hash for FixedKey<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl<T: KeyInt, E: EndianTransform> AsKeyView for FixedKey<T, E> {
    #[inline]
    fn key_view(&self) -> KeyView<'_> {
        self.view()
    }
}

impl<T: KeyInt, E: EndianTransform> AsRef<[u8]> for FixedKey<T, E> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: KeyInt, E: EndianTransform> fmt::Display for FixedKey<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl<T: KeyInt, E: EndianTransform> fmt::Debug for FixedKey<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "FixedKey({value:?} => {})", self.to_hex()),
            None => f.write_str("FixedKey(<unset>)"),
        }
    }
}

// The byte layout is fixed by the transform, so the binrw endian is ignored.
impl<T: KeyInt, E: EndianTransform> BinRead for FixedKey<T, E> {
    type Args<'a> = ();

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        _endian: Endian,
        _args: Self::Args<'_>,
    ) -> BinResult<Self> {
        let mut bytes = T::Bytes::default();
        reader.read_exact(bytes.as_mut())?;
        Ok(Self::from_encoded(bytes))
    }
}

impl<T: KeyInt, E: EndianTransform> BinWrite for FixedKey<T, E> {
    type Args<'a> = ();

    fn write_options<W: Write + Seek>(
        &self,
        writer: &mut W,
        _endian: Endian,
        _args: Self::Args<'_>,
    ) -> BinResult<()> {
        let Some(bytes) = &self.encoded else {
            return Err(binrw::Error::Custom {
                pos: writer.stream_position()?,
                err: Box::new(KeyError::Unset),
            });
        };
        writer.write_all(bytes.as_ref())?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: KeyInt, E: EndianTransform> serde::Serialize for FixedKey<T, E> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: KeyInt, E: EndianTransform> serde::Deserialize<'de> for FixedKey<T, E> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
