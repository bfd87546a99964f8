//  Errors.

use core::{error, fmt};

/// A bit position outside of a set's capacity.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OutOfBounds {
    /// The rejected position.
    pub index: usize,
    /// The capacity of the set, in bits.
    pub bit_count: usize,
}

impl fmt::Display for OutOfBounds {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "Bit index {} out of bounds for {} bits",
            self.index, self.bit_count
        )
    }
}

impl error::Error for OutOfBounds {}
