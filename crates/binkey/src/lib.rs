//! Order-preserving binary keys for sorted index structures
//!
//! This crate provides the key primitives used by ordered trees and tries in a
//! key-value engine: borrowed byte views that compare lexicographically, and
//! fixed-width integer keys whose bytes sort like their values.
//!
//! # Components
//!
//! - **Views**: [`KeyView`] borrows bytes owned elsewhere and never allocates
//! - **Fixed-width keys**: [`FixedKey`] stores one integer in an inline buffer
//! - **Endian transforms**: [`BigEndian`] (canonical) and [`NativeEndian`]
//! - **Capability**: [`AsKeyView`] lets index code compare keys of any type
//!
//! # Composite keys
//!
//! Multi-field keys are built by concatenating 8-byte fields and decoded one
//! field at a time with [`KeyView::slice`] and [`KeyView::shift`]. Shifting past
//! the end of a view is a programming error and panics; [`KeyView::try_shift`]
//! returns a [`KeyError`] instead.
//!
//! # Signed integers
//!
//! Signed keys store raw two's complement. Negative values therefore sort after
//! positive ones. Use unsigned keys where byte order must match numeric order.
//!
//! # Examples
//!
//! ## Comparing views
//!
//! ```
//! use binkey::KeyView;
//!
//! assert!(KeyView::from("ab") < KeyView::from("abc"));
//! assert!(KeyView::from("abc") < KeyView::from("ac"));
//! assert_eq!(KeyView::from(&[0xde_u8, 0xad, 0x00]).to_string(), "dead00");
//! ```
//!
//! ## Decoding a composite key
//!
//! ```
//! use binkey::{KeyView, U64Key};
//!
//! let mut composite = Vec::new();
//! composite.extend_from_slice(U64Key::new(7).as_bytes());
//! composite.extend_from_slice(U64Key::new(42).as_bytes());
//!
//! let view = KeyView::from(&composite);
//! assert_eq!(view.slice(), 7);
//! assert_eq!(view.shift().slice(), 42);
//! assert!(view.shift_many(2).is_empty());
//! ```
//!
//! ## Fixed-width keys
//!
//! ```
//! use binkey::{AsKeyView, U32Key};
//!
//! let small = U32Key::new(255);
//! let large = U32Key::new(256);
//! assert!(small < large);
//! assert_eq!(small.to_hex(), "000000ff");
//! assert_eq!(large.key_view().len(), 4);
//! ```

#![warn(missing_docs)]

pub mod endian;
pub mod error;
pub mod fixed;
pub mod view;

pub use error::{KeyError, Result};

// Re-export commonly used types
pub use endian::{BigEndian, EndianTransform, KeyInt, NativeEndian};
pub use fixed::{FixedKey, I8Key, I16Key, I32Key, I64Key, U8Key, U16Key, U32Key, U64Key};
pub use view::{AsKeyView, KeyView, WORD};
