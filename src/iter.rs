use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;

use crate::{BitWord, FixedBitSet};

//  Position of a set bit, shared by the read-only and the mutable views.
//
//  The cursor is either active (`word_idx < words.len()`) or at the end
//  (`word_idx == words.len()`, `offset == 0`, empty cache). `cache` holds the
//  bits of the current word that are still to be visited; the bit at `offset`
//  is already removed from it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<W> {
    word_idx: usize,
    offset: u32,
    cache: W,
}

impl<W: BitWord> Cursor<W> {
    pub(crate) fn end(word_count: usize) -> Self {
        Self {
            word_idx: word_count,
            offset: 0,
            cache: W::ZERO,
        }
    }

    // Positions the cursor on the first set bit at or after `from`.
    pub(crate) fn seek(words: &[W], from: usize) -> Self {
        let word_bits = W::BITS as usize;
        let word_idx = from / word_bits;
        let Some(&word) = words.get(word_idx) else {
            return Self::end(words.len());
        };

        let below = (from % word_bits) as u32;
        let mut cursor = Self {
            word_idx,
            offset: 0,
            cache: word & !W::low_mask(below),
        };
        cursor.find_next(words);
        cursor
    }

    pub(crate) fn is_end(&self, word_count: usize) -> bool {
        self.word_idx >= word_count
    }

    pub(crate) fn position(&self, word_count: usize) -> Option<usize> {
        if self.is_end(word_count) {
            return None;
        }
        Some(self.word_idx * W::BITS as usize + self.offset as usize)
    }

    pub(crate) fn find_next(&mut self, words: &[W]) {
        while self.cache == W::ZERO {
            self.word_idx += 1;
            self.offset = 0;
            match words.get(self.word_idx) {
                Some(&word) => self.cache = word,
                None => {
                    self.word_idx = words.len();
                    return;
                }
            }
        }

        self.offset = self.cache.trailing_zeros();
        self.cache &= !W::bit(self.offset);
    }

    // Number of set bits from the current one (inclusive) to the end.
    fn remaining(&self, words: &[W]) -> usize {
        if self.is_end(words.len()) {
            return 0;
        }
        let rest: usize = words[self.word_idx + 1..]
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum();
        1 + self.cache.count_ones() as usize + rest
    }
}

impl<W> PartialEq for Cursor<W> {
    fn eq(&self, other: &Self) -> bool {
        self.word_idx == other.word_idx && self.offset == other.offset
    }
}

impl<W> Eq for Cursor<W> {}

/// Iterator over the positions of the set bits of a [`FixedBitSet`], in
/// ascending order.
///
/// Besides being an [`Iterator`], `Ones` exposes its position: [`current`]
/// peeks at the bit the iterator stands on and [`advance`] moves to the next
/// one. Two iterators compare equal when they stand on the same position;
/// all exhausted iterators over a set are equal to [`FixedBitSet::ones_end`].
///
/// Returned by [`FixedBitSet::iter_ones()`] and
/// [`FixedBitSet::iter_ones_from()`].
///
/// [`current`]: Ones::current
/// [`advance`]: Ones::advance
#[derive(Clone)]
pub struct Ones<'set, const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord = u64> {
    words: &'set [W; WORD_COUNT],
    cursor: Cursor<W>,
}

impl<'set, const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord>
    Ones<'set, BIT_COUNT, WORD_COUNT, W>
{
    pub(crate) fn new(words: &'set [W; WORD_COUNT], from: usize) -> Self {
        debug_assert!(from <= BIT_COUNT, "Bit index {from} out of bounds");
        Self {
            words,
            cursor: Cursor::seek(words, from),
        }
    }

    pub(crate) fn end(words: &'set [W; WORD_COUNT]) -> Self {
        Self {
            words,
            cursor: Cursor::end(WORD_COUNT),
        }
    }

    /// Returns the position the iterator stands on, or `None` once exhausted.
    ///
    /// Unlike [`next`](Iterator::next) this does not move the iterator.
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitSet16;
    ///
    /// let set = BitSet16::<12>::from_ones_iter([3, 7]);
    /// let mut ones = set.iter_ones();
    /// assert_eq!(ones.current(), Some(3));
    /// ones.advance();
    /// assert_eq!(ones.current(), Some(7));
    /// ones.advance();
    /// assert_eq!(ones.current(), None);
    /// ```
    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.cursor.position(WORD_COUNT)
    }

    /// Moves to the next set bit.
    ///
    /// Advancing an exhausted iterator leaves it exhausted.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.cursor.find_next(self.words);
        self
    }

    /// Returns `true` once every set bit has been visited.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.cursor.is_end(WORD_COUNT)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Iterator
    for Ones<'_, BIT_COUNT, WORD_COUNT, W>
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.current()?;
        self.advance();
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining(self.words);
        (remaining, Some(remaining))
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> ExactSizeIterator
    for Ones<'_, BIT_COUNT, WORD_COUNT, W>
{
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> FusedIterator
    for Ones<'_, BIT_COUNT, WORD_COUNT, W>
{
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> PartialEq
    for Ones<'_, BIT_COUNT, WORD_COUNT, W>
{
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Eq
    for Ones<'_, BIT_COUNT, WORD_COUNT, W>
{
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Debug
    for Ones<'_, BIT_COUNT, WORD_COUNT, W>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ones")
            .field("current", &self.current())
            .finish()
    }
}

/// A cursor over the set bits of a [`FixedBitSet`] that can clear the bit it
/// stands on.
///
/// The cursor holds the set exclusively for its lifetime, so the only way to
/// mutate the set while walking it is [`clear_current`]. Clearing does not
/// disturb the walk: the cursor has already recorded which bits of the current
/// word remain to be visited.
///
/// Returned by [`FixedBitSet::cursor_mut()`] and
/// [`FixedBitSet::cursor_mut_from()`].
///
/// # Examples
/// ```
/// use fixed_bit_set::{FixedBitSet, word_count};
///
/// let mut set = FixedBitSet::<100, { word_count(100) }>::from_ones_iter([2, 5, 64, 99]);
///
/// let mut cursor = set.cursor_mut();
/// while let Some(pos) = cursor.current() {
///     if pos % 2 == 0 {
///         cursor.clear_current();
///     }
///     cursor.move_next();
/// }
///
/// assert_eq!(set.iter_ones().collect::<Vec<_>>(), [5, 99]);
/// ```
///
/// [`clear_current`]: CursorMut::clear_current
pub struct CursorMut<'set, const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord = u64> {
    set: &'set mut FixedBitSet<BIT_COUNT, WORD_COUNT, W>,
    cursor: Cursor<W>,
}

impl<'set, const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord>
    CursorMut<'set, BIT_COUNT, WORD_COUNT, W>
{
    pub(crate) fn new(set: &'set mut FixedBitSet<BIT_COUNT, WORD_COUNT, W>, from: usize) -> Self {
        debug_assert!(from <= BIT_COUNT, "Bit index {from} out of bounds");
        let cursor = Cursor::seek(&set.0, from);
        Self { set, cursor }
    }

    /// Returns the position the cursor stands on, or `None` once exhausted.
    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.cursor.position(WORD_COUNT)
    }

    /// Moves to the next set bit.
    ///
    /// Moving an exhausted cursor leaves it exhausted.
    #[inline]
    pub fn move_next(&mut self) -> &mut Self {
        self.cursor.find_next(&self.set.0);
        self
    }

    /// Returns `true` once every set bit has been visited.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.cursor.is_end(WORD_COUNT)
    }

    /// Clears the bit at the current position in the underlying set.
    ///
    /// The cursor keeps its position; the next call to [`move_next`] proceeds
    /// to the following set bit as if nothing had changed.
    ///
    /// # Panics
    /// In debug builds, panics if the cursor is exhausted. Release builds
    /// ignore the call.
    ///
    /// [`move_next`]: CursorMut::move_next
    #[inline]
    pub fn clear_current(&mut self) {
        debug_assert!(!self.is_end(), "Cannot clear the bit of an exhausted cursor");
        if let Some(word) = self.set.0.get_mut(self.cursor.word_idx) {
            *word &= !W::bit(self.cursor.offset);
        }
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Debug
    for CursorMut<'_, BIT_COUNT, WORD_COUNT, W>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("current", &self.current())
            .finish()
    }
}
