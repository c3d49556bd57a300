//! Endian transforms between native integers and canonical key bytes
//!
//! An [`EndianTransform`] is a bijection from a native integer of width `W` to
//! a `W`-byte array. [`BigEndian`] is the canonical key layout: for unsigned
//! integers, byte-wise comparison of the output agrees with numeric order.
//!
//! Signed integers are reinterpreted bit-for-bit. Their two's-complement
//! encoding puts negative values after positive ones in byte order, so signed
//! keys do not sort numerically across the sign boundary.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Native integer types that can be stored in a fixed-width key
///
/// Implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64` and `i64`.
pub trait KeyInt: sealed::Sealed + Copy + Eq + Ord + fmt::Debug + Send + Sync + 'static {
    /// Byte array holding one encoded value
    type Bytes: Copy + Default + AsRef<[u8]> + AsMut<[u8]> + fmt::Debug + Send + Sync + 'static;

    /// Encoded width in bytes
    const WIDTH: usize;

    /// Whether the type is signed
    const SIGNED: bool;

    /// Most significant byte first
    fn encode_be(self) -> Self::Bytes;

    /// Inverse of [`KeyInt::encode_be`]
    fn decode_be(bytes: Self::Bytes) -> Self;

    /// Host byte order
    fn encode_ne(self) -> Self::Bytes;

    /// Inverse of [`KeyInt::encode_ne`]
    fn decode_ne(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_key_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl KeyInt for $t {
                type Bytes = [u8; std::mem::size_of::<$t>()];

                const WIDTH: usize = std::mem::size_of::<$t>();
                const SIGNED: bool = <$t>::MIN != 0;

                #[inline]
                fn encode_be(self) -> Self::Bytes {
                    self.to_be_bytes()
                }

                #[inline]
                fn decode_be(bytes: Self::Bytes) -> Self {
                    <$t>::from_be_bytes(bytes)
                }

                #[inline]
                fn encode_ne(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                #[inline]
                fn decode_ne(bytes: Self::Bytes) -> Self {
                    <$t>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_key_int!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Mapping between native integers and their stored key bytes
pub trait EndianTransform: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// True when byte order of encoded values matches numeric order
    ///
    /// Applies to unsigned integers only. Signed values are never
    /// order-preserving across the sign boundary, whatever this says.
    const ORDER_PRESERVING: bool;

    /// Encode a native value into key bytes
    fn encode<T: KeyInt>(value: T) -> T::Bytes;

    /// Decode key bytes back into the native value
    fn decode<T: KeyInt>(bytes: T::Bytes) -> T;
}

/// Canonical key layout, most significant byte first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

impl EndianTransform for BigEndian {
    const ORDER_PRESERVING: bool = true;

    #[inline]
    fn encode<T: KeyInt>(value: T) -> T::Bytes {
        value.encode_be()
    }

    #[inline]
    fn decode<T: KeyInt>(bytes: T::Bytes) -> T {
        T::decode_be(bytes)
    }
}

/// Host byte order
///
/// Keys built with this transform are only ordered on big-endian hosts and
/// must not be persisted across machines of differing byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NativeEndian;

impl EndianTransform for NativeEndian {
    const ORDER_PRESERVING: bool = cfg!(target_endian = "big");

    #[inline]
    fn encode<T: KeyInt>(value: T) -> T::Bytes {
        value.encode_ne()
    }

    #[inline]
    fn decode<T: KeyInt>(bytes: T::Bytes) -> T {
        T::decode_ne(bytes)
    }
}
