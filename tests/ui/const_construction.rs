use fixed_bit_set::{BitSet8, BitSet16, BitSet32, BitSet64, FixedBitSet, word_count, words_for};

const FLAGS: BitSet8<5> = BitSet8::new();
static TABLE: FixedBitSet<1024, { word_count(1024) }> = FixedBitSet::new();

fn main() {
    let _ = BitSet8::<1>::new();
    let _ = BitSet16::<9>::new();
    let _ = BitSet32::<17>::new();
    let _ = BitSet64::<33>::new();
    let _ = FixedBitSet::<20, { words_for::<u8>(20) }, u8>::new();
    let _ = FixedBitSet::<65, { word_count(65) }>::new();

    assert!(FLAGS.is_empty());
    assert_eq!(TABLE.popcount(), 0);
}
