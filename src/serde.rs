// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`SimpleVector`](crate::SimpleVector).
//!
//! - **Serialize**: the live elements as a sequence (length `len`).
//! - **Deserialize**: from any sequence; the vector is pre-sized from the
//!   sequence's size hint and grows as usual past it.
//!
//! Deserializing requires `T: Deserialize<'de> + Default`, because growing a
//! `SimpleVector` default-fills the new slots.

// Crate imports
use crate::vec::SimpleVector;

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(core::marker::PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = SimpleVector<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        // Cap the hint so a hostile length prefix cannot force a huge allocation.
        let hint = a.size_hint().unwrap_or(0).min(4096);
        let mut out = SimpleVector::<T>::with_capacity(hint);
        while let Some(elem) = a.next_element::<T>()? {
            out.push_back(elem);
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for SimpleVector<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(core::marker::PhantomData))
    }
}
