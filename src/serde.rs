//  Serde support, behind the "serde" feature.
//
//  A set is represented by the ascending sequence of its set bit positions,
//  which is independent of the word type and of the platform.

use core::fmt::{self, Formatter};
use core::marker::PhantomData;

use ::serde::de::{Error, SeqAccess, Unexpected, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BitWord, FixedBitSet};

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Serialize
    for FixedBitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_ones())
    }
}

impl<'de, const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Deserialize<'de>
    for FixedBitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(OnesVisitor(PhantomData))
    }
}

struct OnesVisitor<const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord>(
    PhantomData<fn() -> FixedBitSet<BIT_COUNT, WORD_COUNT, W>>,
);

impl<'de, const BIT_COUNT: usize, const WORD_COUNT: usize, W: BitWord> Visitor<'de>
    for OnesVisitor<BIT_COUNT, WORD_COUNT, W>
{
    type Value = FixedBitSet<BIT_COUNT, WORD_COUNT, W>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of bit positions below {BIT_COUNT}")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = FixedBitSet::new();
        while let Some(pos) = seq.next_element::<usize>()? {
            if pos >= BIT_COUNT {
                return Err(A::Error::invalid_value(
                    Unexpected::Unsigned(pos as u64),
                    &self,
                ));
            }
            set.set(pos, true);
        }
        Ok(set)
    }
}
