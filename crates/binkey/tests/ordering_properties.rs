//! Order, equality and round-trip properties of views and fixed-width keys

use binkey::{
    BigEndian, EndianTransform, FixedKey, I8Key, I16Key, I32Key, I64Key, KeyView, U8Key, U16Key,
    U32Key, U64Key,
};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Arbitrary byte strings, biased towards short shared prefixes
fn key_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..=24),
        prop::collection::vec(0u8..=2, 0..=6),
    ]
}

fn reference_cmp(a: &[u8], b: &[u8]) -> Ordering {
    let shared = a.len().min(b.len());
    for i in 0..shared {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

#[test]
fn test_u8_keys_order_exhaustively() {
    for x in u8::MIN..=u8::MAX {
        for y in x..=u8::MAX {
            let (kx, ky) = (U8Key::new(x), U8Key::new(y));
            assert_eq!(kx.cmp(&ky), x.cmp(&y), "{x} vs {y}");
            assert_eq!(kx.view().cmp(&ky.view()), x.cmp(&y));
        }
    }
}

#[test]
fn test_u16_keys_order_exhaustively() {
    // Strictly increasing neighbours imply order for every pair by transitivity
    let mut prev = U16Key::new(0);
    for v in 1..=u16::MAX {
        let cur = U16Key::new(v);
        assert!(prev < cur, "order broken at {v}");
        assert!(prev.view() < cur.view());
        prev = cur;
    }
}

#[test]
fn test_small_width_round_trip_exhaustively() {
    for v in u8::MIN..=u8::MAX {
        assert_eq!(U8Key::new(v).value(), Some(v));
    }
    for v in i8::MIN..=i8::MAX {
        assert_eq!(I8Key::new(v).value(), Some(v));
    }
    for v in u16::MIN..=u16::MAX {
        assert_eq!(U16Key::new(v).value(), Some(v));
    }
    for v in i16::MIN..=i16::MAX {
        assert_eq!(I16Key::new(v).value(), Some(v));
    }
}

#[test]
fn test_signed_keys_sort_by_bit_pattern() {
    // Byte order follows the unsigned reinterpretation, not the signed value
    let mut values: Vec<i16> = vec![-300, -1, 0, 1, 300, i16::MIN, i16::MAX];
    values.sort_by_key(|&v| I16Key::new(v));
    assert_eq!(values, vec![0, 1, 300, i16::MAX, i16::MIN, -300, -1]);
}

proptest! {
    #[test]
    fn view_order_matches_reference(a in key_bytes(), b in key_bytes()) {
        let (va, vb) = (KeyView::from(&a), KeyView::from(&b));
        prop_assert_eq!(va.cmp(&vb), reference_cmp(&a, &b));
        prop_assert_eq!(va.cmp(&vb), vb.cmp(&va).reverse());
        prop_assert_eq!(va.cmp(&va), Ordering::Equal);
    }

    #[test]
    fn view_order_is_transitive(a in key_bytes(), b in key_bytes(), c in key_bytes()) {
        let mut views = [KeyView::from(&a), KeyView::from(&b), KeyView::from(&c)];
        views.sort();
        prop_assert!(views[0] <= views[1]);
        prop_assert!(views[1] <= views[2]);
        prop_assert!(views[0] <= views[2]);
    }

    #[test]
    fn view_equality_is_length_and_bytes(a in key_bytes(), b in key_bytes()) {
        let expected = a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| x == y);
        prop_assert_eq!(KeyView::from(&a) == KeyView::from(&b), expected);
    }

    #[test]
    fn prefix_u64_is_monotonic(a in key_bytes(), b in key_bytes()) {
        let (va, vb) = (KeyView::from(&a), KeyView::from(&b));
        if va <= vb {
            prop_assert!(va.prefix_u64() <= vb.prefix_u64());
        } else {
            prop_assert!(va.prefix_u64() >= vb.prefix_u64());
        }
    }

    #[test]
    fn slice_matches_big_endian_field(bytes in prop::collection::vec(any::<u8>(), 0..=16)) {
        let view = KeyView::from(&bytes);
        let n = bytes.len().min(8);
        let expected = bytes[..n].iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        prop_assert_eq!(view.slice(), expected);
    }

    #[test]
    fn u32_keys_preserve_order(x in any::<u32>(), y in any::<u32>()) {
        prop_assert_eq!(U32Key::new(x).cmp(&U32Key::new(y)), x.cmp(&y));
    }

    #[test]
    fn u64_keys_preserve_order(x in any::<u64>(), y in any::<u64>()) {
        prop_assert_eq!(U64Key::new(x).cmp(&U64Key::new(y)), x.cmp(&y));
        prop_assert_eq!(U64Key::new(x).view().slice(), x);
    }

    #[test]
    fn wide_keys_round_trip(a in any::<u32>(), b in any::<i32>(), c in any::<u64>(), d in any::<i64>()) {
        prop_assert_eq!(U32Key::new(a).value(), Some(a));
        prop_assert_eq!(I32Key::new(b).value(), Some(b));
        prop_assert_eq!(U64Key::new(c).value(), Some(c));
        prop_assert_eq!(I64Key::new(d).value(), Some(d));
        prop_assert_eq!(BigEndian::decode::<u64>(BigEndian::encode(c)), c);
    }

    #[test]
    fn same_sign_signed_keys_preserve_order(x in 0i64.., y in 0i64..) {
        prop_assert_eq!(I64Key::new(x).cmp(&I64Key::new(y)), x.cmp(&y));
        prop_assert_eq!(I64Key::new(-x - 1).cmp(&I64Key::new(-y - 1)), (-x - 1).cmp(&(-y - 1)));
    }

    #[test]
    fn copies_view_their_own_storage(v in any::<u64>()) {
        let original: FixedKey<u64> = FixedKey::new(v);
        let copy = original;
        let boxed = Box::new(copy);

        let own = |key: &FixedKey<u64>| {
            let start = std::ptr::from_ref(key) as usize;
            let end = start + std::mem::size_of::<FixedKey<u64>>();
            let data = key.view().as_bytes().as_ptr() as usize;
            data >= start && data + 8 <= end
        };

        prop_assert!(own(&original));
        prop_assert!(own(&copy));
        prop_assert!(own(&*boxed));
        prop_assert_eq!(boxed.value(), Some(v));
    }
}
