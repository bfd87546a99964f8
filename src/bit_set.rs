use core::fmt::{Debug, Formatter};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::{BitWord, CursorMut, Ones, OutOfBounds};

pub(crate) const fn assert_const_params(bit_count: usize, word_count: usize, word_bits: u32) {
    assert!(bit_count > 0, "BIT_COUNT must be greater than zero.");
    assert!(
        bit_count.div_ceil(word_bits as usize) == word_count,
        "WORD_COUNT must match words_for::<W>(BIT_COUNT)."
    );
}

/// A fixed-capacity set of bits, indexed `0..BIT_COUNT`.
///
/// `BIT_COUNT` is the number of usable bits. `WORD_COUNT` is the number of
/// internal words of type `W` and should only be set via const expression
/// with [`word_count`] (for the default `u64` word) or [`words_for`]. Single
/// word sets over narrower words are available as [`BitSet8`], [`BitSet16`],
/// [`BitSet32`] and [`BitSet64`].
///
/// Both parameters are checked when the type is used: `BIT_COUNT == 0` or a
/// `WORD_COUNT` that doesn't match `BIT_COUNT` fails to compile.
///
/// ```compile_fail
/// use fixed_bit_set::BitSet8;
///
/// // 9 bits don't fit in a single `u8`.
/// let set = BitSet8::<9>::new();
/// ```
///
/// Bit positions are checked with `debug_assert!`: out of range positions
/// panic in debug builds and are unchecked in release builds, where they may
/// corrupt the set but never memory.
///
/// [`word_count`]: crate::word_count
/// [`words_for`]: crate::words_for
/// [`BitSet8`]: crate::BitSet8
/// [`BitSet16`]: crate::BitSet16
/// [`BitSet32`]: crate::BitSet32
/// [`BitSet64`]: crate::BitSet64
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct FixedBitSet<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord = u64>(
    pub(crate) [W; WORD_COUNT],
);

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> FixedBitSet<BIT_COUNT, WORD_COUNT, W> {
    const CONST_PARAMS: () = assert_const_params(BIT_COUNT, WORD_COUNT, W::BITS);

    /// Creates a new set with all bits unset.
    ///
    /// Callable in compile-time contexts such as const initialization.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::{BitSet16, FixedBitSet, word_count};
    ///
    /// const EMPTY: BitSet16<10> = BitSet16::new();
    /// assert_eq!(EMPTY.popcount(), 0);
    ///
    /// let set = FixedBitSet::<500, { word_count(500) }>::new();
    /// assert!(set.is_empty());
    /// ```
    #[allow(clippy::let_unit_value)]
    pub const fn new() -> Self {
        let () = Self::CONST_PARAMS;
        Self([W::ZERO; WORD_COUNT])
    }

    /// Creates a new set with all bits set.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitSet16;
    ///
    /// let set = BitSet16::<10>::with_all_set();
    /// assert_eq!(set.popcount(), 10);
    /// ```
    #[inline]
    pub fn with_all_set() -> Self {
        !Self::new()
    }

    /// Constructs a set by setting only the positions provided in the
    /// iterator.
    ///
    /// # Panics
    /// Panics if any position is out of bounds (i.e., `>= BIT_COUNT`).
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitSet8;
    ///
    /// let set = BitSet8::<5>::from_ones_iter([0, 2, 4]);
    /// assert!(set.test(0));
    /// assert!(!set.test(1));
    /// assert_eq!(set.popcount(), 3);
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        match Self::try_from_ones_iter(iter) {
            Ok(set) => set,
            Err(err) => panic!("{err}"),
        }
    }

    /// Constructs a set by setting only the positions provided in the
    /// iterator, rejecting out of bounds positions.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::{BitSet8, OutOfBounds};
    ///
    /// assert!(BitSet8::<5>::try_from_ones_iter([0, 4]).is_ok());
    /// assert_eq!(
    ///     BitSet8::<5>::try_from_ones_iter([0, 5]),
    ///     Err(OutOfBounds { index: 5, bit_count: 5 }),
    /// );
    /// ```
    pub fn try_from_ones_iter<I: IntoIterator<Item = usize>>(iter: I) -> Result<Self, OutOfBounds> {
        let mut set = Self::new();
        for index in iter {
            if index >= BIT_COUNT {
                return Err(OutOfBounds {
                    index,
                    bit_count: BIT_COUNT,
                });
            }
            set.set(index, true);
        }
        Ok(set)
    }

    /// Returns the number of usable bits, `BIT_COUNT`.
    #[inline]
    pub const fn capacity() -> usize {
        BIT_COUNT
    }

    /// Returns the underlying words, least significant bits first.
    ///
    /// Bits of the last word beyond `BIT_COUNT` are always zero.
    #[inline]
    pub fn words(&self) -> &[W; WORD_COUNT] {
        &self.0
    }

    /// Returns `true` if the bit at the given position is set.
    ///
    /// # Panics
    /// In debug builds, panics if `pos >= BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitSet8;
    ///
    /// let mut set = BitSet8::<8>::new();
    /// set.set(1, true);
    /// assert!(set.test(1));
    /// assert!(!set.test(0));
    /// ```
    #[inline]
    pub fn test(&self, pos: usize) -> bool {
        debug_assert!(pos < BIT_COUNT, "Bit index {pos} out of bounds");
        let (word_idx, offset) = Self::idxs(pos);
        self.0[word_idx] & W::bit(offset) != W::ZERO
    }

    /// Sets the bit at the given position to `value`.
    ///
    /// Returns the set, so calls can be chained.
    ///
    /// # Panics
    /// In debug builds, panics if `pos >= BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitSet8;
    ///
    /// let mut set = BitSet8::<8>::new();
    /// set.set(3, true).set(5, true).set(3, false);
    /// assert!(!set.test(3));
    /// assert!(set.test(5));
    /// ```
    #[inline]
    pub fn set(&mut self, pos: usize, value: bool) -> &mut Self {
        debug_assert!(pos < BIT_COUNT, "Bit index {pos} out of bounds");
        let (word_idx, offset) = Self::idxs(pos);
        if value {
            self.0[word_idx] |= W::bit(offset);
        } else {
            self.0[word_idx] &= !W::bit(offset);
        }
        self
    }

    /// Unsets the bit at the given position, same as `set(pos, false)`.
    ///
    /// # Panics
    /// In debug builds, panics if `pos >= BIT_COUNT`.
    #[inline]
    pub fn reset(&mut self, pos: usize) -> &mut Self {
        self.set(pos, false)
    }

    /// Toggles the bit at the given position.
    ///
    /// # Panics
    /// In debug builds, panics if `pos >= BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitSet8;
    ///
    /// let mut set = BitSet8::<8>::new();
    /// set.flip(4);
    /// assert!(set.test(4));
    /// set.flip(4);
    /// assert!(!set.test(4));
    /// ```
    #[inline]
    pub fn flip(&mut self, pos: usize) -> &mut Self {
        debug_assert!(pos < BIT_COUNT, "Bit index {pos} out of bounds");
        let (word_idx, offset) = Self::idxs(pos);
        self.0[word_idx] ^= W::bit(offset);
        self
    }

    /// Unsets every bit.
    #[inline]
    pub fn clear(&mut self) {
        self.0.fill(W::ZERO);
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|word| *word == W::ZERO)
    }

    /// Returns `true` if every bit is set.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.trailing_ones() == BIT_COUNT
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitSet8;
    ///
    /// let set = BitSet8::<4>::from_ones_iter([0, 2]);
    /// assert_eq!(set.popcount(), 2);
    /// ```
    #[inline]
    pub fn popcount(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Counts the consecutive unset bits starting from the highest position,
    /// `BIT_COUNT - 1`, downwards.
    ///
    /// Returns `BIT_COUNT` if no bit is set.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::{FixedBitSet, word_count};
    ///
    /// let mut set = FixedBitSet::<100, { word_count(100) }>::new();
    /// assert_eq!(set.leading_zeros(), 100);
    /// set.set(90, true);
    /// assert_eq!(set.leading_zeros(), 9);
    /// ```
    pub fn leading_zeros(&self) -> usize {
        let word_bits = W::BITS as usize;
        for (word_idx, word) in self.0.iter().enumerate().rev() {
            let zeros = word.leading_zeros() as usize;
            if zeros < word_bits {
                // the padding above BIT_COUNT is part of `zeros` and cancels out
                return BIT_COUNT + zeros - (word_idx + 1) * word_bits;
            }
        }
        BIT_COUNT
    }

    /// Counts the consecutive set bits starting from the highest position,
    /// `BIT_COUNT - 1`, downwards.
    ///
    /// Returns `BIT_COUNT` if every bit is set.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitSet16;
    ///
    /// let set = BitSet16::<10>::from_ones_iter([0, 7, 8, 9]);
    /// assert_eq!(set.leading_ones(), 3);
    /// ```
    pub fn leading_ones(&self) -> usize {
        let word_bits = W::BITS as usize;
        for (word_idx, &word) in self.0.iter().enumerate().rev() {
            // the padding counts as ones so it never cuts a run short
            let word = if word_idx == WORD_COUNT - 1 {
                word | !Self::remainder_mask()
            } else {
                word
            };
            let ones = word.leading_ones() as usize;
            if ones < word_bits {
                return BIT_COUNT + ones - (word_idx + 1) * word_bits;
            }
        }
        BIT_COUNT
    }

    /// Counts the consecutive unset bits from position 0 upwards.
    ///
    /// This is the position of the lowest set bit, or `BIT_COUNT` if no bit is
    /// set. See [`trailing_zeros_from`](Self::trailing_zeros_from).
    #[inline]
    pub fn trailing_zeros(&self) -> usize {
        self.trailing_zeros_from(0)
    }

    /// Counts the consecutive unset bits from `from` upwards, and returns
    /// `from` plus that count.
    ///
    /// The result is the position of the lowest set bit at or after `from`, or
    /// `BIT_COUNT` if there is none. In particular, it is `from` if the bit at
    /// `from` is set.
    ///
    /// # Panics
    /// In debug builds, panics if `from > BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::{FixedBitSet, word_count};
    ///
    /// let set = FixedBitSet::<200, { word_count(200) }>::from_ones_iter([3, 150]);
    /// assert_eq!(set.trailing_zeros_from(0), 3);
    /// assert_eq!(set.trailing_zeros_from(3), 3);
    /// assert_eq!(set.trailing_zeros_from(4), 150);
    /// assert_eq!(set.trailing_zeros_from(151), 200);
    /// ```
    pub fn trailing_zeros_from(&self, from: usize) -> usize {
        debug_assert!(from <= BIT_COUNT, "Bit index {from} out of bounds");
        let word_bits = W::BITS as usize;
        let (start, offset) = Self::idxs(from);
        let Some(&first) = self.0.get(start) else {
            return BIT_COUNT;
        };

        let zeros = (first & !W::low_mask(offset)).trailing_zeros() as usize;
        if zeros < word_bits {
            return start * word_bits + zeros;
        }
        for (word_idx, word) in self.0.iter().enumerate().skip(start + 1) {
            let zeros = word.trailing_zeros() as usize;
            if zeros < word_bits {
                return word_idx * word_bits + zeros;
            }
        }
        BIT_COUNT
    }

    /// Counts the consecutive set bits from position 0 upwards.
    ///
    /// This is the position of the lowest unset bit, or `BIT_COUNT` if every
    /// bit is set. See [`trailing_ones_from`](Self::trailing_ones_from).
    #[inline]
    pub fn trailing_ones(&self) -> usize {
        self.trailing_ones_from(0)
    }

    /// Counts the consecutive set bits from `from` upwards, and returns `from`
    /// plus that count.
    ///
    /// The result is the position of the lowest unset bit at or after `from`,
    /// or `BIT_COUNT` if there is none. In particular, it is `from` if the bit
    /// at `from` is unset.
    ///
    /// # Panics
    /// In debug builds, panics if `from > BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::{FixedBitSet, word_count};
    ///
    /// let mut set = FixedBitSet::<100, { word_count(100) }>::with_all_set();
    /// set.reset(70);
    /// assert_eq!(set.trailing_ones_from(0), 70);
    /// assert_eq!(set.trailing_ones_from(70), 70);
    /// assert_eq!(set.trailing_ones_from(71), 100);
    /// ```
    pub fn trailing_ones_from(&self, from: usize) -> usize {
        debug_assert!(from <= BIT_COUNT, "Bit index {from} out of bounds");
        let word_bits = W::BITS as usize;
        let (start, offset) = Self::idxs(from);
        let Some(&first) = self.0.get(start) else {
            return BIT_COUNT;
        };

        // bits below `from` count as ones, padding above BIT_COUNT stays zero
        let ones = (first | W::low_mask(offset)).trailing_ones() as usize;
        if ones < word_bits {
            return start * word_bits + ones;
        }
        for (word_idx, word) in self.0.iter().enumerate().skip(start + 1) {
            let ones = word.trailing_ones() as usize;
            if ones < word_bits {
                return word_idx * word_bits + ones;
            }
        }
        BIT_COUNT
    }

    /// Returns an iterator over the positions of all set bits, in ascending
    /// order.
    ///
    /// Iterating through the entire iterator runs in O(max(k, w)) where k is
    /// the number of set bits and w is the word count.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitSet8;
    ///
    /// let set = BitSet8::<5>::from_ones_iter([0, 2, 4]);
    /// let mut ones = set.iter_ones();
    /// assert_eq!(ones.next(), Some(0));
    /// assert_eq!(ones.next(), Some(2));
    /// assert_eq!(ones.next(), Some(4));
    /// assert_eq!(ones.next(), None);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> Ones<'_, BIT_COUNT, WORD_COUNT, W> {
        self.iter_ones_from(0)
    }

    /// Returns an iterator over the positions of the set bits at or after
    /// `from`, in ascending order.
    ///
    /// `from == BIT_COUNT` gives an exhausted iterator.
    ///
    /// # Panics
    /// In debug builds, panics if `from > BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::{FixedBitSet, word_count};
    ///
    /// let set = FixedBitSet::<88, { word_count(88) }>::with_all_set();
    /// assert!(set.iter_ones_from(64).eq(64..88));
    /// assert_eq!(set.iter_ones_from(88), set.ones_end());
    /// ```
    #[inline]
    pub fn iter_ones_from(&self, from: usize) -> Ones<'_, BIT_COUNT, WORD_COUNT, W> {
        Ones::new(&self.0, from)
    }

    /// Returns an exhausted iterator, equal to any iterator over this set once
    /// it has visited every set bit.
    #[inline]
    pub fn ones_end(&self) -> Ones<'_, BIT_COUNT, WORD_COUNT, W> {
        Ones::end(&self.0)
    }

    /// Returns a cursor over the set bits that can clear the bit it stands on.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitSet16;
    ///
    /// let mut set = BitSet16::<12>::from_ones_iter([1, 4, 9]);
    /// let mut cursor = set.cursor_mut();
    /// cursor.move_next();
    /// cursor.clear_current();
    /// assert_eq!(cursor.current(), Some(4));
    /// assert!(set.iter_ones().eq([1, 9]));
    /// ```
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, BIT_COUNT, WORD_COUNT, W> {
        self.cursor_mut_from(0)
    }

    /// Returns a cursor over the set bits at or after `from`.
    ///
    /// # Panics
    /// In debug builds, panics if `from > BIT_COUNT`.
    #[inline]
    pub fn cursor_mut_from(&mut self, from: usize) -> CursorMut<'_, BIT_COUNT, WORD_COUNT, W> {
        CursorMut::new(self, from)
    }

    #[inline]
    fn idxs(pos: usize) -> (usize, u32) {
        let word_bits = W::BITS as usize;
        (pos / word_bits, (pos % word_bits) as u32)
    }

    // Mask over the bits of the last word that are below BIT_COUNT.
    #[inline]
    fn remainder_mask() -> W {
        match (BIT_COUNT % W::BITS as usize) as u32 {
            0 => W::ONES,
            bits_in_last => W::low_mask(bits_in_last),
        }
    }

    #[inline]
    fn clean_unused_bits(&mut self) {
        self.0[WORD_COUNT - 1] &= Self::remainder_mask();
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Default
    for FixedBitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'set, const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> IntoIterator
    for &'set FixedBitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Item = usize;
    type IntoIter = Ones<'set, BIT_COUNT, WORD_COUNT, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_ones()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Debug
    for FixedBitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        for pos in 0..BIT_COUNT {
            if pos % 8 == 0 {
                write!(f, "{pos}: ")?;
            }
            write!(f, "{}", if self.test(pos) { '1' } else { '0' })?;
            if pos % 8 == 7 && pos < BIT_COUNT - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}

/// Constructs a set from the positions of its set bits.
///
/// # Panics
/// Panics if any position is out of bounds (i.e., `>= BIT_COUNT`).
impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> FromIterator<usize>
    for FixedBitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self::from_ones_iter(iter)
    }
}

/// Sets the bits at the given positions.
///
/// # Panics
/// Panics if any position is out of bounds (i.e., `>= BIT_COUNT`).
impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Extend<usize>
    for FixedBitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for pos in iter {
            assert!(pos < BIT_COUNT, "Bit index {pos} out of bounds");
            self.set(pos, true);
        }
    }
}

//  Word-wise binary operators. Only sets of the very same type combine, so the
//  operands always have the same length and the remainder bits stay zero.
macro_rules! impl_word_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident) => {
        impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> $assign<&Self>
            for FixedBitSet<BIT_COUNT, WORD_COUNT, W>
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: &Self) {
                for (word, rhs_word) in self.0.iter_mut().zip(rhs.0.iter()) {
                    word.$assign_fn(*rhs_word);
                }
            }
        }

        impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> $assign
            for FixedBitSet<BIT_COUNT, WORD_COUNT, W>
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                self.$assign_fn(&rhs);
            }
        }

        impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> $op
            for FixedBitSet<BIT_COUNT, WORD_COUNT, W>
        {
            type Output = Self;

            #[inline]
            fn $op_fn(mut self, rhs: Self) -> Self::Output {
                self.$assign_fn(&rhs);
                self
            }
        }

        impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> $op
            for &FixedBitSet<BIT_COUNT, WORD_COUNT, W>
        {
            type Output = FixedBitSet<BIT_COUNT, WORD_COUNT, W>;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self::Output {
                let mut result = *self;
                result.$assign_fn(rhs);
                result
            }
        }
    };
}

impl_word_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_word_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_word_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

/// Complements every bit below `BIT_COUNT`; the padding of the last word
/// stays zero.
impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Not
    for FixedBitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Output = Self;

    #[inline]
    fn not(mut self) -> Self::Output {
        for word in &mut self.0 {
            *word = !*word;
        }
        self.clean_unused_bits();
        self
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Not
    for &FixedBitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Output = FixedBitSet<BIT_COUNT, WORD_COUNT, W>;

    #[inline]
    fn not(self) -> Self::Output {
        !*self
    }
}
