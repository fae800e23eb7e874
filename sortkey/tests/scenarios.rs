//! Worked examples and exhaustive permutation checks

use sortkey::{Direction, KeyComparator, KeyValueComparator, Predicate};

#[test]
fn slice_bits_2_to_6() {
    let cmp = KeyComparator::<u8>::new(Direction::Ascending, 2, 6).unwrap();
    // Slices 0b0101 = 5 and 0b1001 = 9.
    assert!(cmp.less(&0b0001_0100, &0b0010_0100));
    assert!(!cmp.less(&0b0010_0100, &0b0001_0100));
    // Slices 0b0100 = 4 and 0b1100 = 12.
    assert!(cmp.less(&0b0001_0000, &0b0011_0000));
}

#[test]
fn bits_outside_the_range_are_ignored() {
    let cmp = KeyComparator::<u8>::new(Direction::Ascending, 2, 6).unwrap();
    let a = 0b0001_0100;
    let b = 0b1101_0111; // same slice, every outside bit flipped
    assert!(!cmp.less(&a, &b));
    assert!(!cmp.less(&b, &a));
    // Bit 7 alone would decide a full-width comparison, but not this one.
    assert!(cmp.less(&0b1000_0000, &0b0000_0100));
}

#[test]
fn descending_full_width() {
    let cmp = KeyComparator::<u32>::new(Direction::Descending, 0, 32).unwrap();
    assert!(!cmp.less(&3, &7));
    assert!(cmp.less(&7, &3));
}

#[test]
fn signed_and_float_keys_full_width() {
    let ints = KeyComparator::<i64>::full(Direction::Descending);
    assert!(ints.less(&5, &-5));
    let floats = KeyComparator::<f64>::full(Direction::Ascending);
    assert!(floats.less(&-0.5, &0.25));
    assert!(!floats.less(&0.0, &-0.0));
}

/// Every ordering of the same input sorts to the same sequence of slices.
#[test]
fn every_permutation_sorts_to_the_same_keys() {
    let cmp = KeyValueComparator::<u16, u8>::new(Direction::Descending, 4, 12).unwrap();
    let mut pairs = [
        (0x0ab0_u16, 0_u8),
        (0xfab1, 1),
        (0x0120, 2),
        (0x0ff0, 3),
        (0x1120, 4),
        (0x0000, 5),
        (0x0121, 6),
    ];

    let mut expected: Option<Vec<u16>> = None;
    let mut count = 0_usize;
    for permutation in permutohedron::Heap::new(&mut pairs) {
        let mut sorted = permutation;
        cmp.sort(&mut sorted[..]);
        assert!(cmp.is_sorted(&sorted[..]));
        let slices: Vec<u16> = sorted.iter().map(|(k, _)| (k >> 4) & 0xff).collect();
        match &expected {
            Some(expected) => assert_eq!(&slices, expected),
            None => expected = Some(slices),
        }
        count += 1;
    }
    assert_eq!(count, 7 * 6 * 5 * 4 * 3 * 2);
    assert_eq!(
        expected.unwrap(),
        vec![0xff, 0xab, 0xab, 0x12, 0x12, 0x12, 0x00]
    );
}

/// Stability of the reference sort: equal slices keep their input order.
#[test]
fn reference_sort_is_stable() {
    let cmp = KeyValueComparator::<u8, char>::new(Direction::Ascending, 0, 4).unwrap();
    let mut items = [
        (0x31, 'a'),
        (0x10, 'b'),
        (0x21, 'c'),
        (0xf0, 'd'),
        (0x01, 'e'),
    ];
    cmp.sort(&mut items[..]);
    let values: String = items.iter().map(|&(_, v)| v).collect();
    assert_eq!(values, "bdace");
}
