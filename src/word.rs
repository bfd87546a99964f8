use core::fmt::{Binary, Debug};
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer used as the storage word of a [`FixedBitSet`].
///
/// This trait is the bit-scan capability the container is written against:
/// population count, leading/trailing zero counts and the masks needed to
/// address a bit inside a word. It is implemented for `u8`, `u16`, `u32` and
/// `u64` and sealed against further implementations.
///
/// The zero counts delegate to the primitive integer methods, which compile
/// to the native instruction where the target has one and to a software
/// loop otherwise.
///
/// [`FixedBitSet`]: crate::FixedBitSet
pub trait BitWord:
    Copy
    + Eq
    + Hash
    + Debug
    + Binary
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + sealed::Sealed
{
    /// Number of bits in a word.
    const BITS: u32;

    /// A word with no bit set.
    const ZERO: Self;

    /// A word with every bit set.
    const ONES: Self;

    /// Returns a word with only the bit at `offset` set.
    ///
    /// `offset` must be strictly less than [`BITS`](BitWord::BITS).
    fn bit(offset: u32) -> Self;

    /// Returns a word with the `width` lowest bits set.
    ///
    /// `width` may range from `0` (no bit) to [`BITS`](BitWord::BITS)
    /// (every bit).
    ///
    /// # Examples
    /// ```
    /// use fixed_bit_set::BitWord;
    ///
    /// assert_eq!(<u8 as BitWord>::low_mask(0), 0);
    /// assert_eq!(<u8 as BitWord>::low_mask(3), 0b111);
    /// assert_eq!(<u8 as BitWord>::low_mask(8), 0xff);
    /// ```
    fn low_mask(width: u32) -> Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Number of unset bits above the highest set bit, [`BITS`](BitWord::BITS)
    /// for zero.
    fn leading_zeros(self) -> u32;

    /// Number of unset bits below the lowest set bit, [`BITS`](BitWord::BITS)
    /// for zero.
    fn trailing_zeros(self) -> u32;

    /// Number of set bits above the highest unset bit.
    #[inline]
    fn leading_ones(self) -> u32 {
        (!self).leading_zeros()
    }

    /// Number of set bits below the lowest unset bit.
    #[inline]
    fn trailing_ones(self) -> u32 {
        (!self).trailing_zeros()
    }
}

macro_rules! impl_bit_word {
    ($($t:ty)+) => {
        $(
        impl sealed::Sealed for $t {}

        impl BitWord for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONES: Self = <$t>::MAX;

            #[inline]
            fn bit(offset: u32) -> Self {
                debug_assert!(offset < Self::BITS, "Bit offset {offset} out of word");
                1 << offset
            }

            #[inline]
            fn low_mask(width: u32) -> Self {
                // a full-width shift overflows to zero, which wraps to all ones
                (1 as $t).checked_shl(width).unwrap_or(0).wrapping_sub(1)
            }

            #[inline]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }

            #[inline]
            fn leading_zeros(self) -> u32 {
                <$t>::leading_zeros(self)
            }

            #[inline]
            fn trailing_zeros(self) -> u32 {
                <$t>::trailing_zeros(self)
            }
        }
        )+
    };
}

impl_bit_word!(u8 u16 u32 u64);

/// Computes the number of `W` words needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use fixed_bit_set::words_for;
///
/// assert_eq!(words_for::<u8>(9), 2);
/// assert_eq!(words_for::<u16>(9), 1);
/// assert_eq!(words_for::<u64>(129), 3);
/// ```
pub const fn words_for<W: BitWord>(bit_count: usize) -> usize {
    bit_count.div_ceil(W::BITS as usize)
}

/// Computes the number of `u64` words needed to store `bit_count` bits.
///
/// This is the `WORD_COUNT` of a [`FixedBitSet`] using the default word type.
/// It's recommended to inline this call as a const expression into the type
/// annotation generics.
///
/// # Examples
/// ```
/// use fixed_bit_set::{FixedBitSet, word_count};
///
/// assert_eq!(word_count(64), 1);
/// assert_eq!(word_count(65), 2);
///
/// let set = FixedBitSet::<403, { word_count(403) }>::new();
/// assert_eq!(set.words().len(), 7);
/// ```
///
/// [`FixedBitSet`]: crate::FixedBitSet
pub const fn word_count(bit_count: usize) -> usize {
    words_for::<u64>(bit_count)
}

/// Returns the width of the narrowest standard word holding `bit_count` bits,
/// or `64` when several words are needed.
///
/// # Examples
/// ```
/// use fixed_bit_set::narrowest_word_bits;
///
/// assert_eq!(narrowest_word_bits(1), 8);
/// assert_eq!(narrowest_word_bits(9), 16);
/// assert_eq!(narrowest_word_bits(17), 32);
/// assert_eq!(narrowest_word_bits(33), 64);
/// assert_eq!(narrowest_word_bits(1024), 64);
/// ```
pub const fn narrowest_word_bits(bit_count: usize) -> u32 {
    match bit_count {
        0..=8 => u8::BITS,
        9..=16 => u16::BITS,
        17..=32 => u32::BITS,
        _ => u64::BITS,
    }
}
