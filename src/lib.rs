//! A fixed-capacity bit set written in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe` - just `core`.
//!
//! [`FixedBitSet`] is the main struct in this library. It stores `BIT_COUNT`
//! flags, indexed `0..BIT_COUNT`, in an array of unsigned words and supports
//! bitwise algebra, bit-scan queries and iteration over the set positions.
//!
//! # Examples
//! ```
//! use fixed_bit_set::{FixedBitSet, word_count};
//!
//! const BIT_COUNT: usize = 403;
//! let mut set = FixedBitSet::<BIT_COUNT, { word_count(BIT_COUNT) }>::new();
//! set.set(10, true).set(250, true).set(255, true);
//!
//! assert_eq!(set.popcount(), 3);
//! assert_eq!(set.trailing_zeros(), 10);
//! assert_eq!(set.leading_zeros(), BIT_COUNT - 256);
//! assert!(set.iter_ones().eq([10, 250, 255]));
//! ```
//!
//! # Layout
//!
//! The const parameters fix both the capacity and the storage:
//! `FixedBitSet<BIT_COUNT, WORD_COUNT, W>` holds `[W; WORD_COUNT]`. Sets of up
//! to 64 bits fit in a single word, and the aliases [`BitSet8`], [`BitSet16`],
//! [`BitSet32`] and [`BitSet64`] pick that word explicitly, so a 9 bit set
//! takes 2 bytes rather than 8. Larger sets use `u64` words, counted with
//! [`word_count`]. [`narrowest_word_bits`] tells which alias fits a capacity.
//!
//! ```
//! use core::mem::size_of;
//! use fixed_bit_set::{BitSet8, BitSet16, FixedBitSet, word_count};
//!
//! assert_eq!(size_of::<BitSet8<1>>(), 1);
//! assert_eq!(size_of::<BitSet16<9>>(), 2);
//! assert_eq!(size_of::<FixedBitSet<1024, { word_count(1024) }>>(), 128);
//! ```
//!
//! The bits of the last word beyond `BIT_COUNT` are always zero, whatever
//! operation was applied, including `!`.
//!
//! # Features
//!
//! - `#![no_std]` compatible, no heap allocations
//! - Const-generic API with compile-time checked parameters
//! - Bit access: `test`, `set`, `reset`, `flip`, chainable
//! - Bit scans: `popcount`, `leading_zeros`, `leading_ones`,
//!   `trailing_zeros_from`, `trailing_ones_from`
//! - Bitwise ops: `&`, `|`, `^`, `!`, `&=`, `|=`, `^=`
//! - Iteration over set positions, from any position: [`Ones`]
//! - Clearing bits while walking them: [`CursorMut`]
//! - Optional `serde` support (feature `serde`), as a sequence of positions

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

mod bit_set;
mod error;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod word;

pub use bit_set::FixedBitSet;
pub use error::OutOfBounds;
pub use iter::{CursorMut, Ones};
pub use word::{BitWord, narrowest_word_bits, word_count, words_for};

/// A set of up to 8 bits, stored in a single `u8`.
pub type BitSet8<const BIT_COUNT: usize> = FixedBitSet<BIT_COUNT, 1, u8>;

/// A set of up to 16 bits, stored in a single `u16`.
pub type BitSet16<const BIT_COUNT: usize> = FixedBitSet<BIT_COUNT, 1, u16>;

/// A set of up to 32 bits, stored in a single `u32`.
pub type BitSet32<const BIT_COUNT: usize> = FixedBitSet<BIT_COUNT, 1, u32>;

/// A set of up to 64 bits, stored in a single `u64`.
pub type BitSet64<const BIT_COUNT: usize> = FixedBitSet<BIT_COUNT, 1, u64>;
