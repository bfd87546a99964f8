use fixed_bit_set::{FixedBitSet, word_count};

type Set = FixedBitSet<130, { word_count(130) }>;

fn main() {
    let mut set = Set::from_ones_iter([1, 64, 129]);

    // several read-only iterators may coexist
    let first = set.iter_ones();
    let second = set.iter_ones_from(64);
    for (a, b) in first.zip(second) {
        assert!(a < b);
    }

    // the cursor borrow ends before the set is read again
    {
        let mut cursor = set.cursor_mut_from(2);
        cursor.clear_current();
    }
    assert!(set.iter_ones().eq([1, 129]));

    let mut sum = 0;
    for pos in &set {
        sum += pos;
    }
    assert_eq!(sum, 130);
}
